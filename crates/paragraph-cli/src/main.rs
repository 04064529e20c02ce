//! `para-nav` - apply one paragraph move to a file and print the resulting cursor.
//!
//! ```text
//! $ printf 'para1\n\npara2\n' > notes.txt
//! $ para-nav notes.txt --offset 0
//! {"anchor":7,"active":7}
//! $ para-nav notes.txt --offset 12 --args '{"forward": false, "extend": true}'
//! {"anchor":12,"active":7}
//! ```

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use paragraph_core::{Direction, Document, NavigateOptions};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "para-nav", version, about = "Move a cursor by paragraph")]
struct Cli {
    /// Text file to navigate.
    file: PathBuf,

    /// Caret offset, in characters.
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// Selection anchor; defaults to the caret offset.
    #[arg(long)]
    anchor: Option<usize>,

    /// Move toward the start of the file.
    #[arg(long)]
    backward: bool,

    /// Extend the selection instead of moving the caret.
    #[arg(long)]
    extend: bool,

    /// Only empty lines separate paragraphs; whitespace-only lines are content.
    #[arg(long)]
    keep_blank_lines: bool,

    /// Do not stop where a paragraph begins.
    #[arg(long)]
    no_stop_at_begin: bool,

    /// Stop where a paragraph ends.
    #[arg(long)]
    stop_at_end: bool,

    /// Navigation arguments as a JSON object; replaces the flags above.
    #[arg(long, env = "PARA_NAV_ARGS")]
    args: Option<String>,

    /// Number of moves to apply.
    #[arg(long, default_value_t = 1)]
    repeat: usize,
}

impl Cli {
    fn options(&self) -> Result<NavigateOptions> {
        if let Some(args) = &self.args {
            return NavigateOptions::from_json(args).context("parsing --args");
        }
        let direction = if self.backward {
            Direction::Backward
        } else {
            Direction::Forward
        };
        Ok(NavigateOptions::new(direction)
            .extend(self.extend)
            .ignore_blank_lines(!self.keep_blank_lines)
            .stop_at_begin(!self.no_stop_at_begin)
            .stop_at_end(self.stop_at_end))
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;
    let options = cli.options()?;

    let mut doc = Document::new(&text);
    doc.set_cursor_pair(cli.anchor.unwrap_or(cli.offset), cli.offset)?;

    for step in 0..cli.repeat {
        match doc.execute(options) {
            Ok(cursor) => info!(step, ?cursor, "moved"),
            Err(err) if err.is_warning() => {
                warn!(%err, "cursor left unchanged");
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("{}", serde_json::to_string(&doc.cursor())?);
    Ok(())
}
