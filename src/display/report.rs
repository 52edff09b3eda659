//! Report formatting utilities for terminal output

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a header line centered within `width`
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}
