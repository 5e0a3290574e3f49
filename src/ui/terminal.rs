//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GauntletTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Banners go to stdout, unbuffered, so they appear before the output of the
/// child process that follows them. Warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GauntletTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            GauntletTheme::new()
        } else {
            GauntletTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    fn print(&mut self, line: &str) {
        writeln!(self.out, "{}", line).ok();
        self.out.flush().ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_banner(msg);
            self.print(&line);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_success(msg);
            self.print(&line);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_header(title);
            self.print(&line);
        }
    }
}

/// Create the terminal UI, honouring `--no-color`, `NO_COLOR` and TTY detection.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let colors = !no_color && should_use_colors();
    Box::new(TerminalUI::new(mode, colors))
}
