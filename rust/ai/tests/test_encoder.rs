use hulhe_ai::encoder::{STATE_DIM, encode_observation, encode_state};
use hulhe_engine::engine::Engine;
use hulhe_engine::player::Action;
use hulhe_engine::rules::{StackMode, TableConfig};

const TOTAL: u32 = 400;
const HISTORY: usize = 121;

#[test]
fn folded_hand_encodes_blinds_and_position() {
    let mut eng = Engine::new(TableConfig::default(), 12).unwrap();
    let sb = eng.start_hand(StackMode::Even).unwrap().button;
    let bb = 1 - sb;
    let state = eng.apply_action(sb, Action::Fold).unwrap();

    let v = encode_state(&state, bb, TOTAL);
    assert_eq!(v.len(), STATE_DIM);

    // two hole cards, one rank bit and one suit bit each
    assert_eq!(v[..34].iter().sum::<f32>(), 4.0);
    assert!(v[34..119].iter().all(|&x| x == 0.0));
    assert_eq!(&v[119..121], &[0.0f32, 1.0]);

    // first preflop slot: the small blind post
    let slot = &v[HISTORY..HISTORY + 9];
    assert_eq!(slot[0], 200.0 / 400.0);
    assert_eq!(slot[1], 199.0 / 400.0);
    assert_eq!(slot[2], 1.0 / 400.0);
    assert_eq!(slot[3 + sb], 1.0);
    assert_eq!(slot[5 + 2], 1.0);

    // flop, turn and river slots stay empty
    assert!(v[HISTORY + 45..].iter().all(|&x| x == 0.0));
}

#[test]
fn button_perspective_sets_first_position_bit() {
    let mut eng = Engine::new(TableConfig::default(), 13).unwrap();
    let sb = eng.start_hand(StackMode::Even).unwrap().button;
    let state = eng.apply_action(sb, Action::Fold).unwrap();
    let v = encode_state(&state, sb, TOTAL);
    assert_eq!(&v[119..121], &[1.0f32, 0.0]);
}

#[test]
fn mid_hand_state_hides_hole_cards_but_observation_shows_own() {
    let mut eng = Engine::new(TableConfig::default(), 14).unwrap();
    let state = eng.start_hand(StackMode::Even).unwrap();
    let sb = state.button;

    let public = encode_state(&state, sb, TOTAL);
    assert!(public[..34].iter().all(|&x| x == 0.0));

    let obs = eng.observation(sb).unwrap();
    let private = encode_observation(&obs, TOTAL);
    assert_eq!(private[..34].iter().sum::<f32>(), 4.0);
    assert_eq!(private[HISTORY..], public[HISTORY..]);
}

#[test]
fn history_keeps_at_most_five_actions_per_street() {
    let mut eng = Engine::new(TableConfig::default(), 15).unwrap();
    let mut state = eng.start_hand(StackMode::Even).unwrap();
    // blinds plus three raises and a call: six preflop entries
    while let Some(seat) = state.to_act {
        let legal = eng.legal_actions(seat);
        let action = if legal.contains(&Action::Raise) { Action::Raise } else { legal[1] };
        state = eng.apply_action(seat, action).unwrap();
        if state.street != hulhe_engine::game::Street::Preflop {
            break;
        }
    }
    let preflop = state
        .action_log
        .iter()
        .filter(|e| e.street == hulhe_engine::game::Street::Preflop)
        .count();
    assert_eq!(preflop, 6);

    let v = encode_state(&state, 0, TOTAL);
    // the sixth preflop entry (the closing call) has no slot; the fifth is the last raise
    let fifth = &v[HISTORY + 4 * 9..HISTORY + 5 * 9];
    assert_eq!(fifth[5 + 3], 1.0);
}
