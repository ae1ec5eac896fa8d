//! Terminal front end: feeds key input to the engine and renders the
//! display after every step.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};

use crate::calculator::{Engine, copy_to_clipboard};
use crate::config::Config;
use crate::input::{Input, parse_script};
use crate::view::DisplayView;

/// How frames are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Words that end an interactive session.
const QUIT_COMMANDS: &[&str] = &["quit", "exit", ":q"];

/// Binds an engine to terminal input and output.
pub struct Terminal {
    engine: Engine,
    format: OutputFormat,
    show_trace: bool,
    copy_on_equals: bool,
}

impl Terminal {
    pub fn new(config: &Config, format: OutputFormat) -> Self {
        Self {
            engine: Engine::new(config.engine_settings()),
            format,
            show_trace: config.show_trace,
            copy_on_equals: config.copy_on_equals,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Dispatch events in order.
    pub fn feed(&mut self, inputs: &[Input]) {
        for &input in inputs {
            self.engine.dispatch(input);
            if input == Input::Equals && self.copy_on_equals {
                self.copy_result();
            }
        }
    }

    /// Render the current state in the configured format.
    pub fn render(&self) -> anyhow::Result<String> {
        let view = DisplayView::from_engine(&self.engine);
        match self.format {
            OutputFormat::Text => Ok(view.render_text(self.show_trace)),
            OutputFormat::Json => view.render_json().context("Failed to serialize display"),
        }
    }

    /// Run one key script and return the rendered result.
    pub fn run_script(&mut self, script: &str) -> anyhow::Result<String> {
        let inputs = parse_script(script).context("Invalid key script")?;
        self.feed(&inputs);
        self.render()
    }

    /// Read key scripts line by line, rendering after each line, until
    /// end of input or a quit command.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> anyhow::Result<()> {
        info!("starting interactive session");
        writeln!(output, "{}", self.render()?)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let line = line.trim();

            if QUIT_COMMANDS.contains(&line) {
                break;
            }

            match parse_script(line) {
                Ok(inputs) => {
                    self.feed(&inputs);
                    writeln!(output, "{}", self.render()?)?;
                }
                Err(err) => writeln!(output, "error: {}", err)?,
            }
            output.flush()?;
        }

        Ok(())
    }

    fn copy_result(&self) {
        let view = DisplayView::from_engine(&self.engine);
        if let Some(text) = view.text_for_clipboard()
            && let Err(err) = copy_to_clipboard(text)
        {
            warn!(%err, "could not copy result");
        }
    }
}
