//! Drift Gallery - drawers on every side and a persisted theme switch
//!
//! ## Command line flags
//!
//! - `--open <side>`: start with a drawer open (`left`, `right`, `top`, `bottom`)
//! - `--config <path>`: use a config file other than ~/.config/drift/config.yaml

mod ui;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use iced::{Size, Task};

use drift_core::config::{default_config_path, load_config, DriftConfig};
use drift_core::Position;
use ui::{GalleryApp, Message};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    open_at: Option<Position>,
    config_path: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--open" => {
                let side = args.next().context("--open needs a side")?;
                parsed.open_at = Some(side.parse()?);
            }
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(parsed)
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("drift-gallery: {:#}", e);
            eprintln!("usage: drift-gallery [--open left|right|top|bottom] [--config <path>]");
            std::process::exit(2);
        }
    };

    log::info!("drift-gallery starting up");

    let config_path = args
        .config_path
        .unwrap_or_else(|| default_config_path("config.yaml"));
    let config: DriftConfig = load_config(&config_path);
    if let Some(side) = args.open_at {
        log::info!("Opening {} drawer at startup (--open)", side);
    }

    // iced wants an Fn boot closure; it runs once
    let boot_state = std::cell::RefCell::new(Some((config, config_path)));

    iced::application(
        move || {
            let (config, config_path) = boot_state
                .borrow_mut()
                .take()
                .unwrap_or_else(|| (DriftConfig::default(), default_config_path("config.yaml")));
            (GalleryApp::new(config, config_path, args.open_at), Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Drift Gallery")
    .window_size(Size::new(960.0, 680.0))
    .run()
}

/// Update function for iced
fn update(app: &mut GalleryApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &GalleryApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &GalleryApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &GalleryApp) -> iced::Theme {
    app.theme()
}
