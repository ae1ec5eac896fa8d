use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use keypad_calc::config::Config;
use keypad_calc::terminal::{OutputFormat, Terminal};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(name = "keypad-calc")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print each frame as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Keep the operator symbol out of the display
    #[arg(long, global = true)]
    no_echo: bool,

    /// Hide the running-expression line
    #[arg(long, global = true)]
    no_trace: bool,

    /// Copy results to the clipboard after equals
    #[arg(long, global = true)]
    copy: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Type a key script, e.g. `12+3{Enter}`, and print the display
    Run { script: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "keypad_calc=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.no_echo {
        config.echo_operator = false;
    }
    if cli.no_trace {
        config.show_trace = false;
    }
    if cli.copy {
        config.copy_on_equals = true;
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut terminal = Terminal::new(&config, format);

    match cli.command {
        Some(Commands::Run { script }) => {
            println!("{}", terminal.run_script(&script)?);
            Ok(())
        }
        None => {
            let stdin = std::io::stdin();
            terminal.run_interactive(stdin.lock(), std::io::stdout())
        }
    }
}
