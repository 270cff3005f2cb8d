//! Human-readable rendering of finished hands for `gamelog.txt`.
//!
//! ```rust
//! use hulhe_cli::formatters::action_label;
//! use hulhe_engine::player::LoggedAction;
//!
//! assert_eq!(action_label(LoggedAction::BigBlind), "big_blind");
//! ```

use std::io::{self, Write};

use hulhe_engine::cards::format_cards;
use hulhe_engine::game::Street;
use hulhe_engine::logger::HandRecord;
use hulhe_engine::player::LoggedAction;
use hulhe_engine::state::{EndReason, Winner};

pub fn action_label(action: LoggedAction) -> &'static str {
    match action {
        LoggedAction::SmallBlind => "small_blind",
        LoggedAction::BigBlind => "big_blind",
        LoggedAction::Fold => "fold",
        LoggedAction::Check => "check",
        LoggedAction::Call => "call",
        LoggedAction::Raise => "raise",
    }
}

pub fn street_label(street: Street) -> &'static str {
    match street {
        Street::Preflop => "PREFLOP",
        Street::Flop => "FLOP",
        Street::Turn => "TURN",
        Street::River => "RIVER",
    }
}

pub fn winner_label(winner: Winner) -> String {
    match winner {
        Winner::Seat(s) => format!("Seat {s}"),
        Winner::Tie => "Tie".to_string(),
    }
}

/// Writes one hand block: starting holdings, the action log grouped by
/// street and the final stacks.
pub fn write_hand_log(w: &mut dyn Write, hand_no: u64, rec: &HandRecord) -> io::Result<()> {
    writeln!(w, "--- Hand #{hand_no} ({}) ---", rec.hand_id)?;
    writeln!(w, "Button is Seat {}", rec.button)?;
    for seat in 0..2 {
        writeln!(
            w,
            "Seat {seat}, Hand: {}, Stack: {}",
            format_cards(&rec.hole_cards[seat]),
            rec.starting_stacks[seat]
        )?;
    }
    writeln!(w, "\n--- Actions ---")?;

    let mut current: Option<Street> = None;
    for entry in &rec.actions {
        if current != Some(entry.street) {
            current = Some(entry.street);
            writeln!(w, "\n** {} **", street_label(entry.street))?;
            if !entry.after.board.is_empty() {
                writeln!(w, "Board: {}", format_cards(&entry.after.board))?;
            }
        }
        writeln!(
            w,
            "Seat {}, action: {}, Stack: {}, Pot: {}",
            entry.seat,
            action_label(entry.action),
            entry.after.seats[entry.seat].stack,
            entry.after.pot
        )?;
    }

    let reason = match rec.result.reason {
        EndReason::Fold => "fold",
        EndReason::Showdown => "showdown",
    };
    writeln!(w, "\n--- Results ({reason}) ---")?;
    writeln!(w, "Board: {}", format_cards(&rec.board))?;
    for seat in 0..2 {
        let end = i64::from(rec.starting_stacks[seat]) + rec.result.net[seat];
        writeln!(
            w,
            "Seat {seat}, Hand: {}, Stack: {end} ({:+})",
            format_cards(&rec.hole_cards[seat]),
            rec.result.net[seat]
        )?;
    }
    writeln!(w, "Pot: {}", rec.result.pot)?;
    writeln!(w, "Winner: {}", winner_label(rec.result.winner))?;
    writeln!(w, "{}\n", "=".repeat(30))
}
