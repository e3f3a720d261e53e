//! Status message helpers for terminal output.

use std::time::Duration;

use owo_colors::OwoColorize;

/// Apply the `--no-color` override before any styled output.
pub fn init_colors(no_color: bool) {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

fn colors_enabled() -> bool {
    console::colors_enabled_stderr()
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {message}");
    }
}

/// Human-friendly duration, e.g. `1.24s` or `380ms`.
pub fn format_duration(duration: Duration) -> String {
    if duration.as_secs() > 0 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sub_second_durations_as_millis() {
        assert_eq!(format_duration(Duration::from_millis(380)), "380ms");
    }

    #[test]
    fn formats_seconds_with_two_decimals() {
        assert_eq!(format_duration(Duration::from_millis(1240)), "1.24s");
    }
}
