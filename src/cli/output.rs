//! Output formatting for CLI

use crate::tictactoe::{BoardState, Cell};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board as a framed grid for human players
pub fn render_board(board: &BoardState) -> String {
    let separator = " -------------";
    let mut out = String::new();
    for row in board.cells().chunks(3) {
        out.push_str(separator);
        out.push('\n');
        let marks: Vec<String> = row
            .iter()
            .map(|&cell| match cell {
                Cell::Empty => " ".to_string(),
                other => other.to_char().to_string(),
            })
            .collect();
        out.push_str(&format!(" | {} |\n", marks.join(" | ")));
    }
    out.push_str(separator);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(549_946), "549,946");
    }

    #[test]
    fn test_render_board() {
        let board = BoardState::from_string("X.. .O. ...").unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], " | X |   |   |");
        assert_eq!(lines[3], " |   | O |   |");
    }
}
