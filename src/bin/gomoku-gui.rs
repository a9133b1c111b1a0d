//! Five-in-a-row in a window

use gomoku::config::GameConfig;
use gomoku::logging;
use gomoku::ui::GomokuApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let config = GameConfig::from_env()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 620.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Five in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Five in a Row",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )?;
    Ok(())
}
