//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Board, Cell};

/// Create a progress bar for multi-game evaluation runs
pub fn create_eval_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with position hints for empty cells
pub fn board_with_hints(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let idx = row * 3 + col;
            let cell = board
                .cell_at(idx)
                .expect("index 0-8 is always on the board");
            let shown = match cell {
                Cell::Empty => char::from_digit(idx as u32, 10).unwrap_or('.'),
                other => other.to_char(),
            };
            out.push(shown);
            if col < 2 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_show_indices_for_empty_cells() {
        let board = Board::from_string("X...O....").unwrap();
        let shown = board_with_hints(&board);
        assert_eq!(shown, "X 1 2\n3 O 5\n6 7 8\n");
    }
}
