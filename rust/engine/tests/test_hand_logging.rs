use std::fs;

use hulhe_engine::engine::Engine;
use hulhe_engine::game::Street;
use hulhe_engine::logger::{HandLogger, HandRecord};
use hulhe_engine::player::{Action, LoggedAction};
use hulhe_engine::rules::{StackMode, TableConfig};

fn folded_hand() -> (Engine, hulhe_engine::state::TableState) {
    let mut eng = Engine::new(TableConfig::default(), 21).unwrap();
    let state = eng.start_hand(StackMode::Even).unwrap();
    let sb = state.button;
    eng.apply_action(sb, Action::Raise).unwrap();
    eng.apply_action(1 - sb, Action::Raise).unwrap();
    let state = eng.apply_action(sb, Action::Fold).unwrap();
    (eng, state)
}

#[test]
fn action_log_records_blinds_and_snapshots() {
    let (_, state) = folded_hand();
    let kinds: Vec<LoggedAction> = state.action_log.iter().map(|e| e.action).collect();
    assert_eq!(
        kinds,
        vec![
            LoggedAction::SmallBlind,
            LoggedAction::BigBlind,
            LoggedAction::Raise,
            LoggedAction::Raise,
            LoggedAction::Fold
        ]
    );
    assert!(state.action_log.iter().all(|e| e.street == Street::Preflop));
    let raise = &state.action_log[3];
    assert_eq!(raise.after.pot, 10);
    assert_eq!(raise.after.seats[raise.seat].current_bet, 6);
    assert_eq!(raise.after.seats[raise.seat].stack, 194);
}

#[test]
fn record_reconstructs_starting_stacks() {
    let (_, state) = folded_hand();
    let rec = HandRecord::from_state("20250102-000001".into(), Some(21), &state).unwrap();
    assert_eq!(rec.starting_stacks, [200, 200]);
    assert_eq!(rec.result.pot, 10);
    assert_eq!(rec.actions.len(), 5);
}

#[test]
fn unfinished_hand_has_no_record() {
    let mut eng = Engine::new(TableConfig::default(), 1).unwrap();
    let state = eng.start_hand(StackMode::Even).unwrap();
    assert!(HandRecord::from_state("x".into(), None, &state).is_none());
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("hands.jsonl");
    let (_, state) = folded_hand();
    {
        let mut logger = HandLogger::create(&path).expect("create logger");
        let id = logger.next_id();
        let rec = HandRecord::from_state(id, Some(21), &state).unwrap();
        logger.write(&rec).expect("write");
        logger.write(&rec).expect("write");
    }
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 2);
    let back: HandRecord = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert!(back.ts.is_some(), "ts should be injected");
    assert_eq!(back.result, state.result.unwrap());
}

#[test]
fn sequential_ids_increment() {
    let mut logger = HandLogger::new(Vec::new(), "20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn existing_timestamp_is_kept() {
    let (_, state) = folded_hand();
    let mut logger = HandLogger::new(Vec::new(), "20260101");
    let mut rec = HandRecord::from_state(logger.next_id(), None, &state).unwrap();
    rec.ts = Some("2026-01-01T00:00:00Z".into());
    logger.write(&rec).unwrap();

    let bytes = logger.into_inner().unwrap();
    let back: HandRecord = serde_json::from_slice(bytes.strip_suffix(b"\n").unwrap()).unwrap();
    assert_eq!(back, rec);
}
