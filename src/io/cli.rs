//! Command-line interface for generating mosaics and replaying panel sessions

use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLOR, DEFAULT_COLUMNS, DEFAULT_DENSITY, DEFAULT_OUTPUT,
    DEFAULT_ROWS, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::export_layout_as_png;
use crate::io::preview::render_mask;
use crate::io::progress::ReplayProgress;
use crate::layout::{GenerationParameters, Rgb};
use crate::session::{MemoryCanvas, Request, Response, SessionContext, SessionController};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridmosaic")]
#[command(
    author,
    version,
    about = "Generate randomized rectangular mosaics"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: u32,

    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Cell edge length (rounded, at least 1)
    #[arg(short = 's', long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f64,

    /// Probability that a cell is filled
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Fill color as #rrggbb
    #[arg(long, default_value_t = DEFAULT_COLOR, value_parser = parse_color)]
    pub color: Rgb,

    /// Random seed for reproducible generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replay panel messages from a JSON-lines file instead of using the flags
    #[arg(long, value_name = "FILE")]
    pub requests: Option<PathBuf>,

    /// Print a text preview of the sampled mask
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress and notification output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_color(value: &str) -> std::result::Result<Rgb, String> {
    Rgb::from_hex(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Generation parameters described by the flags
    pub const fn parameters(&self) -> GenerationParameters {
        GenerationParameters {
            columns: self.columns,
            rows: self.rows,
            color: self.color,
            cell_size: self.cell_size,
            density: self.density,
        }
    }

    /// Where the rendered mosaic is written
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        match &self.requests {
            Some(requests) => Self::replay_output_path(requests),
            None => PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    fn replay_output_path(requests: &Path) -> PathBuf {
        let stem = requests.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = requests.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    /// Check if progress and notifications should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one command-line invocation against an in-memory canvas
pub struct MosaicApp {
    cli: Cli,
    controller: SessionController<MemoryCanvas>,
    context: SessionContext,
}

impl MosaicApp {
    /// Create an app for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let controller = SessionController::seeded(MemoryCanvas::new(), cli.seed);
        Self {
            cli,
            controller,
            context: SessionContext::new(),
        }
    }

    /// Session state after the run
    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Canvas holding the inserted mosaics
    pub const fn canvas(&self) -> &MemoryCanvas {
        self.controller.canvas()
    }

    /// Generate or replay according to the CLI arguments, then export the result
    ///
    /// # Errors
    ///
    /// Returns an error if request handling, file reading or PNG export fails
    pub fn run(&mut self) -> Result<()> {
        if let Some(requests) = self.cli.requests.clone() {
            self.replay(&requests)?;
        } else {
            self.generate()?;
        }

        let output_path = self.cli.output_path();
        self.export(&output_path)
    }

    // Allow print for the requested mask preview
    #[allow(clippy::print_stderr)]
    fn generate(&mut self) -> Result<()> {
        let options = self.cli.parameters();

        let preview = self
            .controller
            .handle(&mut self.context, &Request::Preview { options })?;
        if self.cli.preview {
            if let Response::PreviewData { data } = &preview {
                eprintln!("{}", render_mask(data));
            }
        }

        self.controller
            .handle(&mut self.context, &Request::Confirm { options })?;
        Ok(())
    }

    // Allow print for responses and user notifications
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn replay(&mut self, requests: &Path) -> Result<()> {
        let text = std::fs::read_to_string(requests).map_err(|e| MosaicError::FileSystem {
            path: requests.to_path_buf(),
            operation: "read requests",
            source: e,
        })?;
        let messages: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut progress = if self.cli.should_show_progress() {
            ReplayProgress::new(messages.len())
        } else {
            ReplayProgress::hidden(messages.len())
        };

        for message in messages {
            let seen = self.controller.canvas().notifications().len();
            let (kind, response) = self.controller.dispatch_labeled(&mut self.context, message);
            progress.record(kind, response.is_some());

            if let Some(json) = response {
                println!("{json}");
            }
            if self.cli.should_show_progress() {
                for notice in self.controller.canvas().notifications().iter().skip(seen) {
                    eprintln!("{notice}");
                }
            }
        }

        progress.finish();
        info!(
            "replayed {} requests, {} failed",
            progress.handled(),
            progress.failures()
        );
        Ok(())
    }

    fn export(&self, output_path: &Path) -> Result<()> {
        let id = self
            .context
            .current_artifact
            .ok_or_else(|| MosaicError::ArtifactCreation {
                reason: "no grid was inserted".to_string(),
            })?;
        let layout = self
            .controller
            .canvas()
            .node(id)
            .ok_or(MosaicError::ArtifactLookup { id: id.0 })?;

        let path = output_path.to_str().ok_or_else(|| {
            invalid_parameter("output", &output_path.display(), &"path is not valid UTF-8")
        })?;
        export_layout_as_png(layout, path)
    }
}
