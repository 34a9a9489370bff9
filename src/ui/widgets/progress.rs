// src/ui/widgets/progress.rs

use crate::core::scanner::progress::ScanProgress;
use ratatui::{
    backend::CrosstermBackend,
    prelude::*,
    widgets::Gauge,
    TerminalOptions, Viewport,
};
use std::io::{self, Stdout};

/// Builds the one-line gauge for a progress snapshot.
pub fn progress_gauge(progress: ScanProgress) -> Gauge<'static> {
    let style = if progress.is_done() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Gauge::default()
        .gauge_style(style)
        .ratio(progress.ratio())
        .label(format!("{}/{} targets", progress.completed, progress.total))
}

/// A live progress gauge.
///
/// Updates can arrive out of order from concurrent tasks; only forward
/// movement is drawn.
pub struct ProgressView<B: Backend> {
    terminal: Terminal<B>,
    latest: ScanProgress,
}

impl ProgressView<CrosstermBackend<Stdout>> {
    /// A gauge drawn in a single inline line of the current terminal, below
    /// whatever was printed before.
    pub fn inline(total: usize) -> io::Result<Self> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions { viewport: Viewport::Inline(1) },
        )?;
        Self::new(terminal, total)
    }
}

impl<B: Backend> ProgressView<B> {
    pub fn new(terminal: Terminal<B>, total: usize) -> io::Result<Self> {
        let mut view = Self {
            terminal,
            latest: ScanProgress { completed: 0, total },
        };
        view.draw()?;
        Ok(view)
    }

    #[cfg(test)]
    fn latest(&self) -> ScanProgress {
        self.latest
    }

    pub fn update(&mut self, progress: ScanProgress) -> io::Result<()> {
        if progress.completed <= self.latest.completed {
            return Ok(());
        }
        self.latest.completed = progress.completed;
        self.draw()
    }

    /// Draws the final state and hands the cursor back.
    pub fn finish(mut self) -> io::Result<()> {
        self.draw()?;
        self.terminal.show_cursor()
    }

    fn draw(&mut self) -> io::Result<()> {
        let gauge = progress_gauge(self.latest);
        self.terminal.draw(|frame| frame.render_widget(gauge, frame.area()))?;
        Ok(())
    }

    #[cfg(test)]
    fn backend(&self) -> &B {
        self.terminal.backend()
    }
}
