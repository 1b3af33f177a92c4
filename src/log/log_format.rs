//! Rendering of a single log line.
//!
//! Every line has the shape
//!
//! ```text
//! {date}\t\t{CATEGORY:}\t\t{message}
//! ```
//!
//! The category field is left-justified to [`CATEGORY_FIELD_WIDTH`], the
//! message is capped at [`MAX_MESSAGE_CHARS`] and always ends in `.`, `!`
//! or `?`. No trailing newline is produced; [`LogOutput`](crate::log::log_output::LogOutput)
//! appends it when writing.

use std::fmt::{self, Write as _};

use chrono::{DateTime, Local, TimeZone};

/// Minimum width of the `LABEL:` field.
pub const CATEGORY_FIELD_WIDTH: usize = 8;

/// Messages longer than this many characters are truncated.
pub const MAX_MESSAGE_CHARS: usize = 60;

/// A rendered date longer than this is dropped and the field left empty.
pub const MAX_DATE_CHARS: usize = 30;

/// Placed between the date, category and message fields.
pub const FIELD_SEPARATOR: &str = "\t\t";

/// Stands in for an absent message.
pub const NULL_MESSAGE: &str = "(null)";

const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Renders `when` with the locale's standard date-time representation (`%c`).
///
/// Returns an empty string when there is no time, when the rendering fails,
/// or when it would not fit in [`MAX_DATE_CHARS`].
pub fn render_date<Tz>(when: Option<&DateTime<Tz>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(when) = when else {
        return String::new();
    };

    let mut out = String::new();
    if write!(out, "{}", when.format("%c")).is_err() || out.chars().count() > MAX_DATE_CHARS {
        out.clear();
    }
    out
}

/// Renders `LABEL:` padded on the right to [`CATEGORY_FIELD_WIDTH`].
///
/// An absent label yields a field of blanks so the columns still line up.
pub fn render_category(label: Option<&str>) -> String {
    let field = label.map(|l| format!("{l}:")).unwrap_or_default();
    format!("{field:<width$}", width = CATEGORY_FIELD_WIDTH)
}

/// Truncates `message` to [`MAX_MESSAGE_CHARS`] and guarantees terminal punctuation.
///
/// An absent message renders as [`NULL_MESSAGE`], untouched.
pub fn render_message(message: Option<&str>) -> String {
    let Some(message) = message else {
        return NULL_MESSAGE.to_owned();
    };

    // One extra char of capacity for the appended full stop.
    let mut out = String::with_capacity(message.len().min(MAX_MESSAGE_CHARS * 4) + 1);
    out.extend(message.chars().take(MAX_MESSAGE_CHARS));

    if !out.ends_with(TERMINAL_PUNCTUATION) {
        out.push('.');
    }
    out
}

/// Builds a full log line for the given instant.
pub fn format_entry_at<Tz>(
    when: Option<&DateTime<Tz>>,
    category: Option<&str>,
    message: Option<&str>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
        render_date(when),
        render_category(category),
        render_message(message)
    )
}

/// Builds a full log line stamped with the current local time.
#[must_use]
pub fn format_entry(category: Option<&str>, message: Option<&str>) -> String {
    format_entry_at(Some(&Local::now()), category, message)
}

/// Writes a log line into `dest`, replacing whatever it held.
///
/// Returns the same buffer, or `None` without doing any work when there is
/// no buffer. The category is not validated; any label is rendered as given.
pub fn log_format<'a>(
    dest: Option<&'a mut String>,
    category: Option<&str>,
    message: Option<&str>,
) -> Option<&'a mut String> {
    let dest = dest?;
    dest.clear();
    dest.push_str(&format_entry(category, message));
    Some(dest)
}
