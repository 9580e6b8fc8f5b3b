//! Presenting snapshots
//!
//! A `Presenter` receives a finished snapshot and shows it somewhere. The
//! terminal presenter draws the ratatui widget inline on stdout. Without a
//! terminal (cron, pipes) the plain presenter writes the same lines as text,
//! and the JSON presenter writes the snapshot for other programs to consume.

pub mod widget;

use std::io::{self, Write};

use crossterm::style::Print;
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use thiserror::Error;

use crate::snapshot::Snapshot;

pub use widget::render as render_widget;

/// Errors raised while presenting a snapshot
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Failed to draw widget: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives a complete snapshot and shows it
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), PresentError>;
}

/// Draws the widget inline in the terminal, below the current cursor line
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), PresentError> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(widget::widget_height(snapshot)),
            },
        )?;

        terminal.draw(|frame| widget::render(frame, snapshot))?;

        // Leave the cursor below the widget
        crossterm::execute!(terminal.backend_mut(), Print("\n"))?;
        Ok(())
    }
}

/// Writes the widget's lines as unstyled text
#[derive(Debug)]
pub struct PlainPresenter<W: Write> {
    out: W,
}

impl<W: Write> PlainPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for PlainPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), PresentError> {
        for line in widget::widget_lines(snapshot) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the snapshot as pretty-printed JSON
#[derive(Debug)]
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), PresentError> {
        serde_json::to_writer_pretty(&mut self.out, snapshot)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
