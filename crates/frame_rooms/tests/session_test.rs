//! Tests for the session controller state machine.

use frame_rooms::{Fragment, GameSession, RoomBook, RoomId, StartError, SubmitOutcome};

fn fresh_session() -> GameSession {
    let mut session = GameSession::new(RoomBook::builtin());
    session.start("Ada").expect("Valid name");
    session
}

#[test]
fn test_start_snapshot() {
    let mut session = GameSession::new(RoomBook::builtin());
    assert!(!session.started());

    session.start("Ada").expect("Valid name");

    assert!(session.started());
    assert_eq!(session.username(), &Some("Ada".to_string()));
    assert_eq!(session.current_room(), &RoomId::One);
    assert!(session.fragments().is_empty());
    assert_eq!(session.completed(), &[false; 6]);
}

#[test]
fn test_start_trims_name() {
    let mut session = GameSession::new(RoomBook::builtin());
    session.start("  Ada  ").expect("Valid name");
    assert_eq!(session.username(), &Some("Ada".to_string()));
}

#[test]
fn test_start_rejects_blank_names() {
    let mut session = GameSession::new(RoomBook::builtin());

    assert_eq!(session.start(""), Err(StartError::EmptyName));
    assert_eq!(session.start("   "), Err(StartError::EmptyName));

    assert!(!session.started());
    assert_eq!(session.username(), &None);
}

#[test]
fn test_correct_answer_solves_room() {
    let mut session = fresh_session();

    let outcome = session.submit_answer(RoomId::One, "e");

    match outcome {
        SubmitOutcome::Correct {
            fragment_awarded,
            advance_to,
            ..
        } => {
            assert_eq!(fragment_awarded, Some(Fragment::new('1')));
            assert_eq!(advance_to, Some(RoomId::Two));
        }
        SubmitOutcome::Incorrect => panic!("Expected correct answer"),
    }

    assert!(session.is_completed(RoomId::One));
    assert_eq!(session.fragments(), &vec![Fragment::new('1')]);
    assert_eq!(session.recorded_answer(RoomId::One), Some("e"));

    // The pacing delay is presentational; applying the advance moves on.
    assert_eq!(session.apply_pending_advance(), Some(RoomId::Two));
    assert_eq!(session.current_room(), &RoomId::Two);
    assert_eq!(session.apply_pending_advance(), None);
}

#[test]
fn test_comparison_is_trim_and_case_insensitive() {
    let mut session = fresh_session();

    assert!(session.submit_answer(RoomId::One, "  E  ").is_correct());

    session.navigate(RoomId::Two).expect("Room is unlocked");
    assert!(session.submit_answer(RoomId::Two, " 23 ").is_correct());

    session.navigate(RoomId::Three).expect("Room is unlocked");
    assert!(session.submit_answer(RoomId::Three, "stressed").is_correct());
}

#[test]
fn test_repeated_solves_award_fragment_once() {
    let mut session = fresh_session();

    for attempt in ["e", "E", " e "] {
        assert!(session.submit_answer(RoomId::One, attempt).is_correct());
    }

    assert_eq!(session.fragments().len(), 1);
    assert!(session.is_completed(RoomId::One));

    // The last literal submission wins the record.
    assert_eq!(session.recorded_answer(RoomId::One), Some(" e "));
}

#[test]
fn test_mismatch_mutates_nothing() {
    let mut session = fresh_session();

    for wrong in ["A", "", "24", "e x"] {
        assert_eq!(
            session.submit_answer(RoomId::One, wrong),
            SubmitOutcome::Incorrect
        );
    }

    assert!(!session.is_completed(RoomId::One));
    assert!(session.fragments().is_empty());
    assert_eq!(session.current_room(), &RoomId::One);
    assert_eq!(session.recorded_answer(RoomId::One), None);
    assert_eq!(session.apply_pending_advance(), None);
}

#[test]
fn test_rooms_solve_out_of_order() {
    let mut session = fresh_session();

    // Room 3 is solvable without touching rooms 1 and 2.
    session.navigate(RoomId::Three).expect("Room is unlocked");
    assert!(session.submit_answer(RoomId::Three, "stressed").is_correct());

    assert!(session.is_completed(RoomId::Three));
    assert!(!session.is_completed(RoomId::One));
    assert_eq!(session.fragments(), &vec![Fragment::new('H')]);
}

#[test]
fn test_fragment_order_is_acquisition_order() {
    let mut session = fresh_session();

    session.navigate(RoomId::Four).expect("Room is unlocked");
    assert!(session.submit_answer(RoomId::Four, "rest").is_correct());
    session.navigate(RoomId::One).expect("Room is unlocked");
    assert!(session.submit_answer(RoomId::One, "e").is_correct());

    assert_eq!(
        session.fragments(),
        &vec![Fragment::new('_'), Fragment::new('1')]
    );
}

#[test]
fn test_final_room_schedules_no_advance() {
    let mut session = fresh_session();

    let solves = [
        (RoomId::One, "e"),
        (RoomId::Two, "23"),
        (RoomId::Three, "stressed"),
        (RoomId::Four, "rest"),
        (RoomId::Five, "eve"),
    ];
    for (room, answer) in solves {
        session.navigate(room).expect("Room is unlocked");
        assert!(session.submit_answer(room, answer).is_correct());
    }

    session.navigate(RoomId::Six).expect("All fragments held");
    let outcome = session.submit_answer(RoomId::Six, "1IH_R");

    match outcome {
        SubmitOutcome::Correct {
            fragment_awarded,
            advance_to,
            ..
        } => {
            assert_eq!(fragment_awarded, None);
            assert_eq!(advance_to, None);
        }
        SubmitOutcome::Incorrect => panic!("Expected correct answer"),
    }

    assert!(session.victory());
    assert_eq!(session.apply_pending_advance(), None);
}

#[test]
fn test_victory_is_a_display_condition() {
    let mut session = fresh_session();
    assert!(!session.victory());

    let solves = [
        (RoomId::One, "e"),
        (RoomId::Two, "23"),
        (RoomId::Three, "stressed"),
        (RoomId::Four, "rest"),
        (RoomId::Five, "eve"),
    ];
    for (room, answer) in solves {
        session.navigate(room).expect("Room is unlocked");
        assert!(session.submit_answer(room, answer).is_correct());
    }

    session.navigate(RoomId::Six).expect("All fragments held");
    assert!(session.submit_answer(RoomId::Six, "1ih_r").is_correct());
    assert!(session.victory());

    // Walking away from the final room hides the closing message.
    session.navigate(RoomId::One).expect("Room is unlocked");
    assert!(!session.victory());
}

#[test]
fn test_session_snapshot_serializes() {
    let mut session = fresh_session();
    assert!(session.submit_answer(RoomId::One, "e").is_correct());

    let snapshot = serde_json::to_value(&session).expect("Session serializes");

    assert_eq!(snapshot["username"], "Ada");
    assert_eq!(snapshot["fragments"][0], "1");
    assert_eq!(snapshot["completed"][0], true);
}
