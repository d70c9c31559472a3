//! Timeline event formatting and cell decoding.
//!
//! A timeline is an append-only list of dated notes. On disk it lives in a
//! single cell as a JSON array of strings.

use chrono::NaiveDate;

use crate::constants::TIMELINE_DATE_FORMAT;

/// Format a timeline entry as `MM/DD/YYYY: <note>`.
#[must_use]
pub fn format_event(date: NaiveDate, note: &str) -> String {
    format!("{}: {}", date.format(TIMELINE_DATE_FORMAT), note.trim())
}

/// Encode events as a JSON array for a single CSV cell.
#[must_use]
pub fn encode_events(events: &[String]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a timeline cell.
///
/// Accepts a JSON array of strings, or the Python list repr that older
/// exports contain (items in either quote style, backslash escapes).
/// Returns `None` when the cell cannot be read; an empty cell is an empty
/// timeline.
#[must_use]
pub fn decode_events(cell: &str) -> Option<Vec<String>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(Vec::new());
    }
    if let Ok(events) = serde_json::from_str::<Vec<String>>(cell) {
        return Some(events);
    }
    parse_list_repr(cell)
}

/// Parse `['a', "b's"]`. Trailing commas are allowed, anything else
/// outside a quoted item is rejected.
fn parse_list_repr(cell: &str) -> Option<Vec<String>> {
    let mut chars = cell.strip_prefix('[')?.strip_suffix(']')?.chars().peekable();
    let mut items = Vec::new();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(quote) = chars.next() else {
            return Some(items);
        };
        if quote != '\'' && quote != '"' {
            return None;
        }
        let mut item = String::new();
        loop {
            match chars.next()? {
                c if c == quote => break,
                '\\' => match chars.next()? {
                    'n' => item.push('\n'),
                    't' => item.push('\t'),
                    'r' => item.push('\r'),
                    c @ ('\\' | '\'' | '"') => item.push(c),
                    other => {
                        item.push('\\');
                        item.push(other);
                    }
                },
                c => item.push(c),
            }
        }
        items.push(item);
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => return Some(items),
            Some(',') => {}
            Some(_) => return None,
        }
    }
}
