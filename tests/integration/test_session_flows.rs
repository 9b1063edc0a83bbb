//! Integration tests for full session flows
//!
//! Byte streams go through the decoder into the session, the way the TTY
//! driver feeds it, so these cover editing, interrupts, history recall and
//! the restart lifecycle end to end.

use termfolio::events::{Key, KeyDecoder, KeyEvent};
use termfolio::render::RecordingRenderer;
use termfolio::session::{Flow, Session, SessionState};
use termfolio::Config;

fn test_config() -> Config {
    let mut config = Config::default();
    config.session.user = "guest".to_string();
    config.session.host = "portfolio".to_string();
    config
}

/// Feed raw bytes through the decoder into the session, collecting the
/// flow signal of the last routed event
fn feed_bytes(
    session: &mut Session,
    renderer: &mut RecordingRenderer,
    bytes: &[u8],
) -> Flow {
    let mut decoder = KeyDecoder::new();
    let mut flow = Flow::Continue;
    for &byte in bytes {
        if let Some(event) = decoder.feed(byte) {
            flow = session.handle_key(event, renderer);
        }
    }
    flow
}

#[test]
fn test_typed_line_echoes_and_dispatches() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, b"echo hi\r");
    assert!(renderer.lines().contains(&"hi".to_string()));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_backspace_edits_before_dispatch() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    // "echox" then backspace leaves "echo"
    feed_bytes(&mut session, &mut renderer, b"echox\x7f ok\r");
    assert!(renderer.lines().contains(&"ok".to_string()));
    assert_eq!(
        session.history().entries().collect::<Vec<_>>(),
        vec!["echo ok"]
    );
}

#[test]
fn test_backspace_on_empty_line_does_nothing() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    session.handle_key(KeyEvent::plain(Key::Backspace), &mut renderer);
    assert!(renderer.ops().is_empty(), "no echo for an impossible erase");
}

#[test]
fn test_ctrl_c_interrupts_without_recording() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, b"doomed line\x03");
    assert!(renderer.lines().contains(&"^C".to_string()));
    assert!(session.history().is_empty());
    assert!(session.input_buffer().is_empty());

    // The next line dispatches cleanly
    feed_bytes(&mut session, &mut renderer, b"echo next\r");
    assert!(renderer.lines().contains(&"next".to_string()));
}

#[test]
fn test_ctrl_l_clears_and_keeps_history() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, b"echo kept\r\x0c");
    assert_eq!(renderer.clear_count(), 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_arrow_keys_recall_history_through_decoder() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, b"echo one\recho two\r");

    // Up, Up: land on the oldest entry
    feed_bytes(&mut session, &mut renderer, b"\x1b[A\x1b[A");
    assert_eq!(session.input_buffer(), "echo one");

    // Down: back toward the newest
    feed_bytes(&mut session, &mut renderer, b"\x1b[B");
    assert_eq!(session.input_buffer(), "echo two");

    // Down past the newest clears to a fresh line
    feed_bytes(&mut session, &mut renderer, b"\x1b[B");
    assert!(session.input_buffer().is_empty());
}

#[test]
fn test_recalled_entry_commits_as_new_history_entry() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, b"echo again\r");
    feed_bytes(&mut session, &mut renderer, b"\x1b[A\r");
    assert_eq!(
        session.history().entries().collect::<Vec<_>>(),
        vec!["echo again", "echo again"]
    );
}

#[test]
fn test_recall_cursor_resets_after_commit() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, b"echo a\recho b\r");
    feed_bytes(&mut session, &mut renderer, b"\x1b[A\x1b[A");
    assert_eq!(session.input_buffer(), "echo a");
    feed_bytes(&mut session, &mut renderer, b"\r");

    // A fresh Up starts from the newest entry again
    feed_bytes(&mut session, &mut renderer, b"\x1b[A");
    assert_eq!(session.input_buffer(), "echo a");
}

#[test]
fn test_utf8_input_round_trips_through_decoder() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, "echo héllo ✓\r".as_bytes());
    assert!(renderer.lines().contains(&"héllo ✓".to_string()));
}

#[test]
fn test_exit_lifecycle() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    let flow = feed_bytes(&mut session, &mut renderer, b"exit\r");
    assert_eq!(flow, Flow::TimerScheduled);
    assert!(renderer.plain_text().contains("Goodbye"));

    // Keystrokes before the timer fires are swallowed
    assert_eq!(
        feed_bytes(&mut session, &mut renderer, b"ignored"),
        Flow::Continue
    );
    assert!(session.input_buffer().is_empty());

    // Timer fires: the restart hint appears and any key restarts
    assert_eq!(session.fire_restart_timer(&mut renderer), Flow::Continue);
    assert!(renderer.plain_text().contains("Press any key to restart..."));
    assert_eq!(feed_bytes(&mut session, &mut renderer, b"x"), Flow::Restart);
}

#[test]
fn test_reboot_lifecycle() {
    let mut session = Session::new(&test_config());
    let mut renderer = RecordingRenderer::new();
    let flow = feed_bytes(&mut session, &mut renderer, b"reboot\r");
    assert_eq!(flow, Flow::TimerScheduled);
    assert!(renderer.plain_text().contains("Rebooting system..."));
    assert!(matches!(
        session.state(),
        SessionState::AwaitingRestart { armed: false, .. }
    ));
    // No any-key phase for reboot; the timer restarts directly
    assert_eq!(session.fire_restart_timer(&mut renderer), Flow::Restart);
}

#[test]
fn test_restarted_session_starts_clean() {
    let config = test_config();
    let mut session = Session::new(&config);
    let mut renderer = RecordingRenderer::new();
    feed_bytes(&mut session, &mut renderer, b"echo old\rexit\r");
    session.fire_restart_timer(&mut renderer);
    feed_bytes(&mut session, &mut renderer, b"x");

    // The host builds a fresh session; nothing carries over
    let mut session = Session::new(&config);
    let mut renderer = RecordingRenderer::new();
    session.start(&mut renderer);
    assert!(session.history().is_empty());
    assert_eq!(session.state(), SessionState::Active);
    assert!(renderer.plain_text().contains("Welcome"));
}

#[test]
fn test_history_ring_respects_configured_capacity() {
    let mut config = test_config();
    config.history.max_entries = 3;
    let mut session = Session::new(&config);
    let mut renderer = RecordingRenderer::new();
    for i in 0..5 {
        feed_bytes(&mut session, &mut renderer, format!("echo {}\r", i).as_bytes());
    }
    assert_eq!(session.history().len(), 3);
    assert_eq!(
        session.history().entries().collect::<Vec<_>>(),
        vec!["echo 2", "echo 3", "echo 4"]
    );
}
