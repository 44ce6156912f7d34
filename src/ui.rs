/// Console output of the report generator
///
/// Progress lines go to stdout behind a green program label, errors go to
/// stderr behind a red `error` label. Labels are only colored when the
/// stream is a terminal that supports it.
use lazy_static::lazy_static;
use std::io::{self, Write};
use std::sync::Mutex;
use term::Terminal;

/// Label in front of every progress line
const PROGRAM_LABEL: &str = "scenario-asciidoc";

const ERROR_LABEL: &str = "error";

lazy_static! {
    static ref CONSOLE: Mutex<()> = Mutex::new(());
}

/// Write `<label>: <message>` with a bold colored label, or return false
/// when the terminal cannot color it
fn write_colored<T>(terminal: Option<Box<T>>, label: &str, color: term::color::Color, message: &str) -> bool
where
    T: Terminal + ?Sized,
{
    let Some(mut terminal) = terminal else {
        return false;
    };
    if !terminal.supports_color() || terminal.fg(color).is_err() {
        return false;
    }

    let _ = terminal.attr(term::Attr::Bold);
    let label_written = write!(terminal, "{}", label).is_ok();
    let _ = terminal.reset();
    label_written && writeln!(terminal, ": {}", message).is_ok()
}

/// Print a progress message to stdout
pub fn status(message: &str) {
    let _guard = CONSOLE.lock();
    if !write_colored(term::stdout(), PROGRAM_LABEL, term::color::BRIGHT_GREEN, message) {
        let _ = writeln!(io::stdout(), "{}: {}", PROGRAM_LABEL, message);
    }
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    let _guard = CONSOLE.lock();
    if !write_colored(term::stderr(), ERROR_LABEL, term::color::BRIGHT_RED, message) {
        let _ = writeln!(io::stderr(), "{}: {}", ERROR_LABEL, message);
    }
}
