use std::fs;

use hulhe_cli::run;
use hulhe_engine::cards::format_cards;
use hulhe_engine::logger::HandRecord;
use tempfile::tempdir;

#[test]
fn deal_shows_the_first_hand_a_sim_with_the_same_seed_plays() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert_eq!(run(["hulhe", "deal", "--seed", "9"], &mut out, &mut err), 0);
    let dealt = String::from_utf8(out).unwrap();

    let dir = tempdir().unwrap();
    let mut out = Vec::new();
    let code = run(
        [
            "hulhe",
            "sim",
            "--hands",
            "1",
            "--seed",
            "9",
            "--agents",
            "passive",
            "--stack-mode",
            "even",
            "--output",
            dir.path().to_str().unwrap(),
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let line = fs::read_to_string(dir.path().join("hands.jsonl")).unwrap();
    let rec: HandRecord = serde_json::from_str(line.trim_end()).unwrap();

    // passive play always reaches the river
    assert_eq!(rec.board.len(), 5);
    assert!(dealt.contains(&format!("Seat 0: {} (", format_cards(&rec.hole_cards[0]))));
    assert!(dealt.contains(&format!("Seat 1: {} (", format_cards(&rec.hole_cards[1]))));
    assert!(dealt.contains(&format!("Board: {}\n", format_cards(&rec.board))));
}
