//! Terminal presentation: renders view models and notifications.
pub mod prompt;
pub mod render;

use std::io::{self, Write};

use chrono::Local;
use jobfinder_core::{AppViewModel, Notification, SearchPhase};

/// Receives controller notifications ("toasts").
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

/// Writes rendered views to a terminal-like writer.
///
/// The loading indicator is redrawn in place; everything else is appended.
pub struct TerminalPresenter<W: Write> {
    out: W,
    spinner_width: Option<usize>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            spinner_width: None,
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, view: &AppViewModel) {
        if let Err(err) = self.try_render(view) {
            finder_logging::finder_warn!("Failed to write to terminal: {}", err);
        }
    }

    fn try_render(&mut self, view: &AppViewModel) -> io::Result<()> {
        let lines = render::render(view);
        if view.phase == SearchPhase::Loading {
            if let Some(line) = lines.first() {
                write!(self.out, "\r{line}")?;
                self.spinner_width = Some(line.chars().count());
            }
            return self.out.flush();
        }

        self.clear_spinner()?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn clear_spinner(&mut self) -> io::Result<()> {
        if let Some(width) = self.spinner_width.take() {
            write!(self.out, "\r{}\r", " ".repeat(width))?;
        }
        Ok(())
    }
}

impl<W: Write> NotificationSink for TerminalPresenter<W> {
    fn notify(&mut self, notification: &Notification) {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        let line = render::render_notification(notification, &timestamp);
        if let Err(err) = self.write_notification(&line) {
            finder_logging::finder_warn!("Failed to write notification: {}", err);
        }
    }
}

impl<W: Write> TerminalPresenter<W> {
    fn write_notification(&mut self, line: &str) -> io::Result<()> {
        self.clear_spinner()?;
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}
