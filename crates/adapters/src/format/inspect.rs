//! Human-readable rendering of metadata, in the style of an object inspector:
//! `{ service: 'api', attempts: 3 }`.
//!
//! Containers too wide for [`BREAK_LENGTH`] visible chars are split one
//! entry per line. A property whose rendered value is itself wider than that
//! starts on its own line, indented three columns past its parent.

use super::ansi::{Style, visible_len};
use envlog_domain::LogFields;
use serde_json::{Number, Value};

/// Visible width above which a container breaks across lines.
pub const BREAK_LENGTH: usize = 60;

const OBJECT_INDENT: usize = 3;
const ARRAY_INDENT: usize = 2;

/// Render `fields` as an object literal, optionally colorized.
#[must_use]
pub fn inspect_fields(fields: &LogFields, colors: bool) -> String {
    render_object(fields, colors, 0)
}

/// Render `fields` inline as `key=value, key=value`.
#[must_use]
pub fn inline_fields(fields: &LogFields) -> String {
    fields
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{key}={text}"),
            other => format!("{key}={other}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_value(value: &Value, colors: bool, indent: usize) -> String {
    match value {
        Value::Null => stylize("null", Style::BOLD, colors),
        Value::Bool(flag) => stylize(if *flag { "true" } else { "false" }, Style::YELLOW, colors),
        Value::Number(number) => stylize(&format_number(number), Style::YELLOW, colors),
        Value::String(text) => stylize(&quote(text), Style::GREEN, colors),
        Value::Array(items) => render_array(items, colors, indent),
        Value::Object(map) => render_object(map, colors, indent),
    }
}

fn render_object(map: &LogFields, colors: bool, indent: usize) -> String {
    if map.is_empty() {
        return "{}".to_owned();
    }
    let nested = indent + OBJECT_INDENT;
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| {
            let rendered = render_value(value, colors, nested);
            if visible_len(&rendered) > BREAK_LENGTH {
                format!("{}:\n{}{rendered}", render_key(key, colors), " ".repeat(nested))
            } else {
                format!("{}: {rendered}", render_key(key, colors))
            }
        })
        .collect();
    reduce_to_single_string(&entries, indent, '{', '}')
}

fn render_array(items: &[Value], colors: bool, indent: usize) -> String {
    if items.is_empty() {
        return "[]".to_owned();
    }
    let entries: Vec<String> = items
        .iter()
        .map(|item| render_value(item, colors, indent + ARRAY_INDENT))
        .collect();
    reduce_to_single_string(&entries, indent, '[', ']')
}

fn reduce_to_single_string(entries: &[String], indent: usize, open: char, close: char) -> String {
    if fits_on_one_line(entries, indent) {
        return format!("{open} {} {close}", entries.join(", "));
    }
    let separator = format!(",\n{}  ", " ".repeat(indent));
    format!("{open} {} {close}", entries.join(&separator))
}

// One separator and one space per entry, plus the indentation and the
// opening brace.
fn fits_on_one_line(entries: &[String], indent: usize) -> bool {
    let overhead = entries.len() * 2 + indent + 1;
    if overhead + entries.len() > BREAK_LENGTH {
        return false;
    }
    let content: usize = entries.iter().map(String::as_str).map(visible_len).sum();
    overhead + content <= BREAK_LENGTH
}

fn render_key(key: &str, colors: bool) -> String {
    if is_identifier(key) {
        key.to_owned()
    } else {
        stylize(&quote(key), Style::GREEN, colors)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}

fn format_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => format!("{float}"),
        _ => number.to_string(),
    }
}

fn stylize(text: &str, style: Style, colors: bool) -> String {
    if colors {
        style.paint(text)
    } else {
        text.to_owned()
    }
}
