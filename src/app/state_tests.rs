//! Tests for application state

use super::*;
use crate::test_utils::test_helpers::test_app;
use crate::typing::{SessionOutcome, SessionPhase, TypingEvent};
use std::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Wire a fake session into the app so tests control the event stream.
fn attach_fake_session(app: &mut App) -> mpsc::Sender<TypingEvent> {
    let (tx, rx) = mpsc::channel();
    app.session
        .attach(SessionParams::new(3, 50), CancellationToken::new(), rx);
    tx
}

#[test]
fn test_activation_swaps_clipboard_and_archives() {
    let (mut app, _dir) = test_app("outgoing");
    app.slots.set(2, "canned reply");

    app.activate_slot(2);

    assert_eq!(app.clipboard.read(), "canned reply");
    assert_eq!(app.slots.get(0), "outgoing");
    assert!(
        app.notification
            .current_message()
            .unwrap()
            .contains("archived to slot 1")
    );
}

#[test]
fn test_activating_empty_slot_is_silent() {
    let (mut app, _dir) = test_app("keep me");

    app.activate_slot(0);

    assert_eq!(app.clipboard.read(), "keep me");
    assert!(app.notification.current_message().is_none());
}

#[test]
fn test_edit_commit_updates_slot() {
    let (mut app, _dir) = test_app("");
    app.selected_slot = 3;
    app.begin_edit();
    app.editor
        .as_mut()
        .unwrap()
        .textarea
        .insert_str("typed text");
    app.commit_edit();

    assert_eq!(app.slots.get(3), "typed text");
    assert!(app.editor.is_none());
}

#[test]
fn test_edit_cancel_leaves_slot_untouched() {
    let (mut app, _dir) = test_app("");
    app.slots.set(1, "original");
    app.selected_slot = 1;
    app.begin_edit();
    app.editor.as_mut().unwrap().textarea.insert_str(" changed");
    app.cancel_edit();

    assert_eq!(app.slots.get(1), "original");
}

#[test]
fn test_save_then_load_round_trips() {
    let (mut app, _dir) = test_app("");
    app.slots.set(0, "persisted");
    app.save_slots();

    app.slots.clear(0);
    app.load_slots();

    assert_eq!(app.slots.get(0), "persisted");
    assert!(
        app.notification
            .current_message()
            .unwrap()
            .starts_with("Slots loaded")
    );
}

#[test]
fn test_load_failure_surfaces_error_notification() {
    let (mut app, _dir) = test_app("");
    std::fs::create_dir_all(app.slots_file.parent().unwrap()).unwrap();
    std::fs::write(&app.slots_file, "not json").unwrap();

    app.load_slots();

    assert!(
        app.notification
            .current_message()
            .unwrap()
            .starts_with("Load failed")
    );
    // The in-memory slots are untouched by a failed load
    assert_eq!(app.slots, crate::slots::SlotStore::new());
}

#[test]
fn test_tick_polls_clipboard_when_idle() {
    let (mut app, _dir) = test_app("from clipboard");

    app.tick();

    assert_eq!(app.preview.text(), "from clipboard");
    assert_eq!(app.preview.char_count(), 14);
}

#[test]
fn test_tick_suppresses_poll_while_session_active() {
    let (mut app, _dir) = test_app("live clipboard");
    let _tx = attach_fake_session(&mut app);

    app.tick();

    assert_eq!(
        app.preview.text(),
        "",
        "poll must not run while a session is active"
    );
}

#[test]
fn test_session_events_drive_preview_display() {
    let (mut app, _dir) = test_app("live clipboard");
    let tx = attach_fake_session(&mut app);

    tx.send(TypingEvent::Started {
        text: "snapshot".to_string(),
    })
    .unwrap();
    tx.send(TypingEvent::Progress { index: 3 }).unwrap();
    app.tick();

    assert_eq!(app.preview.text(), "snapshot");
    assert_eq!(app.preview.highlight(), Some(3));
    assert_eq!(app.session.phase(), Some(SessionPhase::Typing));
}

#[test]
fn test_session_finish_clears_highlight() {
    let (mut app, _dir) = test_app("");
    let tx = attach_fake_session(&mut app);

    tx.send(TypingEvent::Started {
        text: "ab".to_string(),
    })
    .unwrap();
    tx.send(TypingEvent::Progress { index: 1 }).unwrap();
    tx.send(TypingEvent::Finished {
        outcome: SessionOutcome::Cancelled,
    })
    .unwrap();
    app.tick();

    assert_eq!(app.preview.highlight(), None);
    assert!(!app.session.is_active());
}

#[test]
fn test_failed_session_shows_warning() {
    let (mut app, _dir) = test_app("");
    let tx = attach_fake_session(&mut app);

    tx.send(TypingEvent::Finished {
        outcome: SessionOutcome::Failed("no display server".to_string()),
    })
    .unwrap();
    app.tick();

    assert!(
        app.notification
            .current_message()
            .unwrap()
            .contains("no display server")
    );
}

#[test]
fn test_quit_is_immediate_when_idle() {
    let (mut app, _dir) = test_app("");
    app.request_quit();
    assert!(app.should_quit());
}

#[test]
fn test_quit_waits_for_active_session() {
    let (mut app, _dir) = test_app("");
    let tx = attach_fake_session(&mut app);

    app.request_quit();
    assert!(!app.should_quit(), "quit should wait for the session");

    tx.send(TypingEvent::Finished {
        outcome: SessionOutcome::Cancelled,
    })
    .unwrap();
    app.tick();
    assert!(app.should_quit());
}

#[test]
fn test_second_quit_request_forces_exit() {
    let (mut app, _dir) = test_app("");
    let _tx = attach_fake_session(&mut app);

    app.request_quit();
    app.request_quit();
    assert!(app.should_quit());
}

#[test]
fn test_control_adjustment_clamps_to_bounds() {
    let (mut app, _dir) = test_app("");

    app.adjust_start_delay(-100);
    assert_eq!(app.controls.start_delay_secs, 1);
    app.adjust_start_delay(1000);
    assert_eq!(app.controls.start_delay_secs, 100);

    app.adjust_interval(-1000);
    assert_eq!(app.controls.interval_units, 1);
    app.adjust_interval(10_000);
    assert_eq!(app.controls.interval_units, 200);
}

#[test]
fn test_controls_feed_session_params() {
    let (mut app, _dir) = test_app("");
    app.adjust_start_delay(7);
    let params = app.controls.session_params();
    assert_eq!(params.start_delay_secs, 10);
    assert_eq!(params.interval_units, 50);
}

#[test]
fn test_slot_selection_saturates() {
    let (mut app, _dir) = test_app("");
    app.select_previous_slot();
    assert_eq!(app.selected_slot, 0);
    for _ in 0..20 {
        app.select_next_slot();
    }
    assert_eq!(app.selected_slot, crate::slots::SLOT_COUNT - 1);
}
