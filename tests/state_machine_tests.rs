use rtimebank::core::calculator::derive_status;
use rtimebank::models::day_status::{DayState, NextAction};

mod common;
use common::schedule;

fn opt(present: bool, t: &'static str) -> Option<&'static str> {
    present.then_some(t)
}

#[test]
fn test_empty_day_is_not_started() {
    let s = schedule(None, None, None, None);
    let status = derive_status(&s, true);

    assert_eq!(status.state, DayState::NotStarted);
    assert_eq!(status.next_action, NextAction::RegisterEntry);
    assert_eq!(status.next_action.label(), "register entry");
}

#[test]
fn test_entry_only_asks_for_lunch_out() {
    let s = schedule(Some("08:00"), None, None, None);
    let status = derive_status(&s, true);

    assert_eq!(status.state, DayState::Working);
    assert_eq!(status.next_action.label(), "register lunch-out");
}

#[test]
fn test_lunch_out_without_return_is_lunch() {
    let s = schedule(Some("08:00"), Some("12:00"), None, None);
    let status = derive_status(&s, true);

    assert_eq!(status.state, DayState::Lunch);
    assert_eq!(status.next_action, NextAction::RegisterLunchReturn);
}

#[test]
fn test_after_lunch_asks_for_exit() {
    let s = schedule(Some("08:00"), Some("12:00"), Some("13:00"), None);
    let status = derive_status(&s, true);

    assert_eq!(status.state, DayState::Working);
    assert_eq!(status.next_action, NextAction::RegisterExit);
}

#[test]
fn test_simplified_mode_skips_lunch() {
    let s = schedule(Some("08:00"), None, None, None);
    assert_eq!(
        derive_status(&s, false).next_action,
        NextAction::RegisterExit
    );

    // an open lunch does not hold the day in the lunch state
    let s = schedule(Some("08:00"), Some("12:00"), None, None);
    let status = derive_status(&s, false);
    assert_eq!(status.state, DayState::Working);
    assert_eq!(status.next_action, NextAction::RegisterExit);
}

#[test]
fn test_exit_always_wins() {
    let s = schedule(None, None, None, Some("17:00"));
    let status = derive_status(&s, true);

    assert_eq!(status.state, DayState::Finished);
    assert_eq!(status.next_action, NextAction::DayComplete);
    assert_eq!(status.next_action.punch_type(), None);
}

#[test]
fn test_every_presence_combination_maps_to_one_status() {
    for bits in 0u8..16 {
        let (e, lo, lr, x) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);

        for require_lunch in [true, false] {
            let s = schedule(
                opt(e, "08:00"),
                opt(lo, "12:00"),
                opt(lr, "13:00"),
                opt(x, "17:00"),
            );
            let status = derive_status(&s, require_lunch);

            let expected = if x {
                DayState::Finished
            } else if !e {
                DayState::NotStarted
            } else if require_lunch && lo && !lr {
                DayState::Lunch
            } else {
                DayState::Working
            };

            assert_eq!(
                status.state, expected,
                "bits={bits:04b} require_lunch={require_lunch}"
            );

            // the next action never asks for a punch that is already there
            if let Some(kind) = status.next_action.punch_type() {
                assert!(!s.has(kind), "bits={bits:04b} asks for present {kind:?}");
            }
        }
    }
}
