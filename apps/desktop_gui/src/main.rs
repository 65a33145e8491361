use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::ReadReviewApp;

#[derive(Debug, Parser)]
#[command(name = "readreview", about = "Predict your research paper's acceptance with AI")]
struct Args {
    /// Base URL of the prediction service.
    #[arg(long, default_value = "http://localhost:8000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(args.server_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ReadReview")
            .with_inner_size([720.0, 680.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ReadReview",
        options,
        Box::new(|_cc| Ok(Box::new(ReadReviewApp::new(cmd_tx, ui_rx)))),
    )
}
