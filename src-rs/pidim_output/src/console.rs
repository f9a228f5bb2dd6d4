//! Console printing of errors and advisories.

use anstream::eprintln;
use owo_colors::Style;
use pidim_core::{Advisory, DiagnosticSink};
use pidim_error::{Context, PidimError, Severity};

use crate::{color::ColorChoice, stylesheet};

/// Prints a formatted error or advisory to standard error.
pub fn print(error: &PidimError, color: ColorChoice) {
    let error_string = error_to_string(error, color);
    eprintln!("{error_string}");
}

/// Converts an error or advisory to its printed form.
///
/// ```text
/// warning: Discarded variables (x)
///  = note: each discarded variable was the only one carrying one of the group's dimensions
/// ```
#[must_use]
pub fn error_to_string(error: &PidimError, color: ColorChoice) -> String {
    let kind_color = match error.severity() {
        Severity::Error => stylesheet::ERROR_COLOR,
        Severity::Warning => stylesheet::WARNING_COLOR,
    };

    let severity = error.severity().to_string();
    let message_line = get_message_line(&severity, kind_color, error.message(), color);
    let context_lines = error.context().iter().map(|context| match context {
        Context::Note(note) => get_context_line("note", stylesheet::NOTE_COLOR, note, color),
        Context::Help(help) => get_context_line("help", stylesheet::HELP_COLOR, help, color),
    });

    std::iter::once(message_line)
        .chain(context_lines)
        .collect::<Vec<_>>()
        .join("\n")
}

fn get_message_line(kind: &str, kind_color: Style, message: &str, color: ColorChoice) -> String {
    // <kind>: <message>
    let kind_str = color.paint(kind_color, kind);
    let message = color.paint(stylesheet::MESSAGE, message);
    format!("{kind_str}: {message}")
}

fn get_context_line(kind: &str, kind_color: Style, message: &str, color: ColorChoice) -> String {
    //  = <kind>: <message>
    let kind_str = color.paint(kind_color, kind);
    format!(" = {kind_str}: {message}")
}

/// A [`DiagnosticSink`] printing every advisory to standard error as a
/// warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleSink {
    color: ColorChoice,
}

impl ConsoleSink {
    /// Creates a sink with the given color choice.
    #[must_use]
    pub const fn new(color: ColorChoice) -> Self {
        Self { color }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, advisory: Advisory) {
        print(&PidimError::from_warning(&advisory), self.color);
    }
}
