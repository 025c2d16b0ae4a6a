//! CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and color control. Colors are only emitted when the
//! target stream supports them or the user forced them with `--color`.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
///
/// Call this early in the CLI entry point.
pub fn configure(config: OutputConfig, color: &ColorChoice) {
    match color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json || regular_output_suppressed(config) {
        return;
    }

    println!(
        "{} {}",
        "insurance-check".if_supports_color(Stream::Stdout, |s| s.bold()),
        version.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();
    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {:<22} {}",
        label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();
    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green()),
        message
    );
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();
    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!(
        "  {} {}",
        "⚠".if_supports_color(Stream::Stdout, |s| s.yellow()),
        message
    );
}

/// Marker in front of a [`verdict`] line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

fn verdict_line(tone: Tone, message: &str) -> String {
    let marker = match tone {
        Tone::Positive => "✓".if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
        Tone::Negative => "⚠".if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
        Tone::Neutral => "=".if_supports_color(Stream::Stdout, |s| s.dimmed()).to_string(),
    };
    format!("  {marker} {message}")
}

/// Print the outcome of a command.
///
/// Not suppressed by quiet mode.
pub fn verdict(tone: Tone, message: &str) {
    if is_json() {
        emit_json_line("verdict", json!({ "message": message }));
        return;
    }

    println!("{}", verdict_line(tone, message));
}

/// Print an error line.
pub fn error(message: &str) {
    let config = read_config();
    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |s| s.red()),
        message
    );
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();
    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {}",
        message.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    let config = read_config();
    if config.json {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {}: {}",
        "hint".if_supports_color(Stream::Stdout, |s| s.cyan()),
        message.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    let config = read_config();
    if config.json {
        emit_json_line("lines", json!({ "content": content }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: &serde_json::Value) {
    println!("{value}");
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    value
        .if_supports_color(Stream::Stdout, |s| s.green())
        .to_string()
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    value
        .if_supports_color(Stream::Stdout, |s| s.red())
        .to_string()
}

/// Format a money amount with two decimals and thousands separators.
#[must_use]
pub fn amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
