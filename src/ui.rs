//! Terminal rendering helpers for the CLI adapter.

use crate::direction::Coord;
use crate::session::GameSession;
use std::collections::BTreeSet;

/// Elapsed seconds as `M:SS`.
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Print the grid with row/column coordinates. Cells of found words are
/// wrapped in brackets; `hint`, if set, is marked with an asterisk.
pub fn print_round(session: &GameSession, hint: Option<Coord>) {
    let Some(grid) = session.grid() else {
        return;
    };

    let revealed: BTreeSet<Coord> = session
        .found_words()
        .iter()
        .filter_map(|w| session.word_path(w))
        .flatten()
        .copied()
        .collect();

    print!("    ");
    for c in 0..grid.width() {
        print!("{:>3}", c);
    }
    println!();
    for (r, row) in grid.rows().iter().enumerate() {
        print!("{:>3} ", r);
        for (c, letter) in row.chars().enumerate() {
            if hint == Some((r, c)) {
                print!(" {}*", letter);
            } else if revealed.contains(&(r, c)) {
                print!("[{}]", letter);
            } else {
                print!(" {} ", letter);
            }
        }
        println!();
    }

    println!();
    print!("Find:");
    for word in session.words() {
        if session.found_words().contains(word) {
            print!("  ~{}~", word);
        } else {
            print!("  {}", word);
        }
    }
    println!();
    println!(
        "Found {}/{} | Time {} | Score {}",
        session.found_count(),
        session.target_count(),
        format_elapsed(session.elapsed().as_secs()),
        session.score()
    );
}
