//! Go-Moku against a random computer
//!
//! Plays in the terminal by default; `--frontend gui` opens a window.

use std::io;

use anyhow::Result;
use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{console, Args, Frontend, GameConfig};

fn run_gui(config: GameConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Go-Moku"),
        ..Default::default()
    };

    eframe::run_native(
        "Go-Moku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open window: {e}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = GameConfig::from(&args);
    log::debug!("starting with {:?} ({:?})", config, args.frontend);

    match args.frontend {
        Frontend::Console => {
            let mut engine = config.build_engine();
            console::run(&mut engine, io::stdin().lock(), io::stdout().lock())?;
        }
        Frontend::Gui => run_gui(config)?,
    }
    Ok(())
}
