//! # Rendering
//!
//! Everything the session and the one-shot commands print is built here as a `String`,
//! so output can be written to any `io::Write` and checked in tests.
//!
//! Width math stays Unicode-aware (`unicode-width`); colors come from `colored`, which
//! honors `NO_COLOR` and the `--no-color` override.

use colored::Colorize;
use notelog::api::{CmdMessage, MessageLevel};
use notelog::config::NotelogConfig;
use notelog::model::DisplayEntry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const MISSING_TIMESTAMP: &str = "--";

pub fn render_placeholder(placeholder: &str) -> String {
    format!("{}\n", placeholder.dimmed())
}

pub fn render_count(label: &str, count: usize) -> String {
    format!("{}: {}\n", label, count.to_string().bold())
}

pub fn render_entries(entries: &[DisplayEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", "No activities logged yet.".dimmed());
    }

    let idx_width = entries.len().to_string().len();
    let time_width = entries
        .iter()
        .map(|de| {
            de.entry
                .timestamp
                .as_deref()
                .unwrap_or(MISSING_TIMESTAMP)
                .width()
        })
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for de in entries {
        let idx_str = format!("{:>width$}. ", de.index, width = idx_width);
        let time_str = de.entry.timestamp.as_deref().unwrap_or(MISSING_TIMESTAMP);
        let time_padding = " ".repeat(time_width.saturating_sub(time_str.width()));

        // two-space indent, index, timestamp column, two-space gap
        let fixed_width = 2 + idx_str.width() + time_width + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let note = truncate_to_width(&single_line(&de.entry.note), available);

        out.push_str(&format!(
            "  {}{}{}  {}\n",
            idx_str.yellow(),
            time_str.dimmed(),
            time_padding,
            note
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_config(config: &NotelogConfig) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
