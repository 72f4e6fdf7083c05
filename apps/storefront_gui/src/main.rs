use std::path::PathBuf;

mod asset_bridge;
mod controller;
mod settings;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::asset_bridge::commands::AssetCommand;
use crate::controller::events::UiEvent;
use crate::ui::StorefrontApp;

#[derive(Debug, Parser)]
#[command(name = "storefront_gui", about = "Desktop storefront for the course catalog")]
struct Args {
    /// Flat TOML file overriding payment-instruction fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tracing env-filter directive.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.as_str())
        .init();

    let catalog = catalog::default_catalog();
    catalog
        .validate()
        .context("embedded tier catalog failed startup validation")?;
    let instructions = settings::load_instructions(args.config.as_deref());

    let (cmd_tx, cmd_rx) = bounded::<AssetCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    asset_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TenaNet Course Storefront")
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TenaNet Course Storefront",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(StorefrontApp::new(
                catalog,
                instructions,
                cmd_tx,
                ui_rx,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to open storefront window: {err}"))
}
