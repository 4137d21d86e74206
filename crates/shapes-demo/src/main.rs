//! Shapes demonstration — entry point.
//!
//! Builds a `Shape`, a `Rectangle` and a `Square`, and prints what each one
//! reports so the effect of encapsulation, composition and overriding can be
//! seen on the console.
//!
//! # Usage
//!
//! ```text
//! shapes-demo [OPTIONS]
//!
//! Options:
//!   --config <PATH>       TOML file with sizes and colors [env: SHAPES_CONFIG]
//!   --only <KIND>         Run only this section (shape, rectangle, square); repeatable
//!   --output <MODE>       plain (stdout) or log (tracing events) [default: plain]
//!   --dump-config         Print the effective configuration as TOML and exit
//!   -v, --verbose         Enable debug logging
//! ```
//!
//! Log verbosity can also be set with `RUST_LOG`, which takes precedence over
//! `--verbose`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shapes_core::{ShapeKind, StdoutConsole, TracingConsole};
use shapes_demo::application::run_showcase;
use shapes_demo::domain::load_config;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Where demonstration lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// One line per message on stdout.
    Plain,
    /// One `INFO` tracing event per message (target `shapes`).
    Log,
}

/// Console demonstration of the shapes-core entities.
#[derive(Debug, Parser)]
#[command(
    name = "shapes-demo",
    about = "Walks through Shape, Rectangle and Square and prints what each reports",
    version
)]
struct Cli {
    /// TOML file overriding the default sizes and colors.
    #[arg(long, env = "SHAPES_CONFIG")]
    config: Option<PathBuf>,

    /// Run only the named section.  May be given more than once.
    #[arg(long = "only", value_name = "KIND")]
    only: Vec<ShapeKind>,

    /// Output destination for the demonstration text.
    #[arg(long, value_enum, default_value_t = OutputMode::Plain)]
    output: OutputMode,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    dump_config: bool,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "shapes=debug,info" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load demo config from {}", path.display()),
        None => "failed to build default demo config".to_string(),
    })?;

    if cli.dump_config {
        let text = config
            .to_toml_string()
            .context("failed to render demo config")?;
        if let Err(e) = io::stdout().lock().write_all(text.as_bytes()) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e).context("failed to write demo config to stdout");
            }
        }
        return Ok(());
    }

    info!(output = ?cli.output, sections = ?cli.only, "shapes demo starting");

    let report = match cli.output {
        OutputMode::Plain => run_showcase(&config, &cli.only, &mut StdoutConsole),
        OutputMode::Log => run_showcase(&config, &cli.only, &mut TracingConsole),
    };

    info!(
        sections = report.sections.len(),
        areas = report.areas.len(),
        "shapes demo finished"
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
