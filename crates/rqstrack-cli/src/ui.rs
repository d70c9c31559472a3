//! Styled status lines for the terminal.
//!
//! Styling is dropped when `NO_COLOR` is set, leaving a bracketed tag.

use console::{style, StyledObject};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Section header, e.g. `=== Summary ===`.
#[must_use]
pub fn header_line(text: &str, plain: bool) -> String {
    let line = format!("=== {text} ===");
    if plain {
        line
    } else {
        style(line).bold().cyan().to_string()
    }
}

type Paint = fn(StyledObject<&str>) -> StyledObject<&str>;

fn tagged(tag: &str, text: &str, plain: bool, paint: Paint) -> String {
    if plain {
        format!("[{tag}] {text}")
    } else {
        format!("{} {text}", paint(style(tag)).bold())
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header_line(text, is_color_disabled()));
}

/// Print a success message, e.g. after a record was saved.
pub fn print_success(text: &str) {
    println!("{}", tagged("OK", text, is_color_disabled(), |s| s.green()));
}

/// Print a notice to stderr.
pub fn print_warning(text: &str) {
    eprintln!("{}", tagged("WARN", text, is_color_disabled(), |s| s.yellow()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", tagged("ERROR", text, is_color_disabled(), |s| s.red()));
}
