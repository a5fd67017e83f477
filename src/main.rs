// SPDX-License-Identifier: MPL-2.0
//! Headless toast demo: shows a toast (or a promise bridge) on the in-memory
//! document and prints the document every step until all toasts are gone.

use corner_toast::config::{self, defaults::TOAST_CLASS};
use corner_toast::surface::MemorySurface;
use corner_toast::toast::{PartialOptions, Position, PromiseOptions, ToastType, Toaster};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;

const HELP: &str = "\
corner-toast: headless toast demo

USAGE:
  corner-toast [OPTIONS]

OPTIONS:
  --message <TEXT>       Toast message
  --type <TYPE>          notice, success, error or any custom type
  --position <POS>       top-left, top-right, bottom-left, ...
  --duration <MS>        Auto-close delay in milliseconds
  --no-auto-close        Keep the toast until it is closed
  --no-close             Do not render a close button
  --colourful            Use the coloured styling
  --promise <ok|fail>    Run the promise bridge around a one second operation
  --config <PATH>        Load defaults from a toast.toml file
  --step-ms <MS>         Snapshot interval [default: 250]
  -h, --help             Print help
";

/// Longest the demo waits for toasts to disappear.
const MAX_RUN: Duration = Duration::from_secs(15);

struct Args {
    message: Option<String>,
    options: PartialOptions,
    promise: Option<String>,
    config: Option<PathBuf>,
    step: Duration,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let mut options = PartialOptions::new();
    options.toast_type = args.opt_value_from_str::<_, ToastType>("--type")?;
    options.position = args.opt_value_from_str::<_, Position>("--position")?;
    options.duration_ms = args.opt_value_from_str("--duration")?;
    if args.contains("--no-auto-close") {
        options.auto_close = Some(false);
    }
    if args.contains("--no-close") {
        options.show_close = Some(false);
    }
    if args.contains("--colourful") {
        options.colourful = Some(true);
    }

    let parsed = Args {
        message: args.opt_value_from_str("--message")?,
        promise: args.opt_value_from_str("--promise")?,
        config: args.opt_value_from_str("--config")?,
        step: Duration::from_millis(args.opt_value_from_str("--step-ms")?.unwrap_or(250)),
        options,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }
    Ok(parsed)
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "corner_toast=info".into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();
    let args = parse_args()?;

    let loaded = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    config::install(loaded);

    let surface = Arc::new(MemorySurface::new());
    let toaster = Toaster::with_surface(surface.clone());

    let mut operation = match args.promise.as_deref() {
        Some(outcome) => {
            let succeed = outcome != "fail";
            let work = async move {
                tokio::time::sleep(Duration::from_secs(1)).await;
                if succeed {
                    Ok("done")
                } else {
                    Err("operation failed")
                }
            };
            let options = PromiseOptions::new()
                .pending(args.message.clone().unwrap_or_else(|| "Working...".into()))
                .overrides(args.options.clone());
            Some(tokio::spawn(toaster.promise(work, options)))
        }
        None => {
            toaster
                .toast(args.message.as_deref(), args.options.clone())
                .show()?;
            None
        }
    };

    let started = Instant::now();
    loop {
        println!("--- t = {} ms", started.elapsed().as_millis());
        print!("{}", surface.snapshot());

        if operation.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = operation.take() {
                info!(result = ?handle.await?, "observed operation settled");
            }
        }
        let settled = operation.is_none();
        if settled && surface.find_by_class(TOAST_CLASS).is_empty() {
            break;
        }
        if started.elapsed() >= MAX_RUN {
            info!("toasts still visible, giving up");
            break;
        }
        tokio::time::sleep(args.step).await;
    }
    Ok(())
}
