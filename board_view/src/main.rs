// main.rs - Desktop viewer for a life_board Board
//
// Usage: board_view [options.json]
// The JSON file holds BoardOptions, e.g. { "height": 120, "width": 200, "ratio": 0.25 }.

use std::error::Error;
use std::fs;

use eframe::egui;
use life_board::{Board, BoardOptions};

mod ui;

fn load_options() -> Result<BoardOptions, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let options = serde_json::from_str(&text)?;
            log::info!("loaded board options from {path}");
            Ok(options)
        }
        None => Ok(BoardOptions::random(100, 100, 0.2)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let board = Board::new(load_options()?)?;
    log::info!(
        "Game of Life - {}x{} board, {} live cells",
        board.height(),
        board.width(),
        board.live_count()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(ui::BoardApp::new(board))),
    )?;
    Ok(())
}
