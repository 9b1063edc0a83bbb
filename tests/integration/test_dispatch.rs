//! Integration tests for command dispatch
//!
//! These drive full key-event sequences through a session and assert on
//! what reaches the display surface, covering every registered command.

use termfolio::events::{Key, KeyEvent};
use termfolio::render::RecordingRenderer;
use termfolio::session::{Flow, Session};
use termfolio::Config;

fn test_config() -> Config {
    let mut config = Config::default();
    config.session.user = "guest".to_string();
    config.session.host = "portfolio".to_string();
    config
}

fn new_session() -> Session {
    Session::new(&test_config())
}

fn run_line(session: &mut Session, renderer: &mut RecordingRenderer, line: &str) -> Flow {
    for ch in line.chars() {
        session.handle_key(KeyEvent::ch(ch), renderer);
    }
    session.handle_key(KeyEvent::plain(Key::Enter), renderer)
}

/// Dispatch a single command against a fresh session and return the
/// renderer, with the keystroke echo discarded
fn run_command(session: &mut Session, line: &str) -> RecordingRenderer {
    let mut renderer = RecordingRenderer::new();
    for ch in line.chars() {
        session.handle_key(KeyEvent::ch(ch), &mut renderer);
    }
    renderer.reset();
    session.handle_key(KeyEvent::plain(Key::Enter), &mut renderer);
    renderer
}

#[test]
fn test_echo_joins_arguments() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "echo hello world");
    assert!(
        renderer.lines().contains(&"hello world".to_string()),
        "echo should print its arguments joined by single spaces"
    );
}

#[test]
fn test_echo_without_arguments_prints_empty_line() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "echo");
    assert!(renderer.lines().contains(&String::new()));
}

#[test]
fn test_whoami_prints_user() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "whoami");
    assert!(renderer.lines().contains(&"guest".to_string()));
}

#[test]
fn test_uname_plain_and_all() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "uname");
    let lines = renderer.lines();
    assert!(lines.iter().any(|l| l.contains("Fedora Linux")));
    assert!(!lines.iter().any(|l| l.contains("GNU/Linux")));

    let renderer = run_command(&mut session, "uname -a");
    assert!(renderer
        .lines()
        .iter()
        .any(|l| l.contains("x86_64 GNU/Linux")));
}

#[test]
fn test_uname_dash_a_recognized_among_other_args() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "uname -s -a");
    assert!(renderer.lines().iter().any(|l| l.contains("GNU/Linux")));
}

#[test]
fn test_date_has_weekday_and_year() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "date");
    let lines = renderer.lines();
    // "Fri Aug 29 14:03:07 2026 +0000" shape; assert on stable parts
    let date_line = lines
        .iter()
        .find(|l| l.contains("20") && l.contains(':'))
        .expect("date should print a timestamp line");
    assert!(date_line.split_whitespace().count() >= 5);
}

#[test]
fn test_help_lists_every_command() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "help");
    let text = renderer.plain_text();
    for name in [
        "help", "clear", "echo", "whoami", "date", "uname", "banner", "exit", "reboot",
        "neofetch", "projects", "skills", "about", "contact", "resume", "history",
    ] {
        assert!(text.contains(name), "help output should mention {}", name);
    }
}

#[test]
fn test_clear_wipes_surface_and_reprompts() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "clear");
    assert_eq!(renderer.clear_count(), 1);
    assert!(renderer.plain_text().contains("guest@portfolio"));
}

#[test]
fn test_banner_repeats_welcome_block() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "banner");
    assert!(renderer.plain_text().contains("Welcome"));
}

#[test]
fn test_neofetch_shows_identity_and_system_rows() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "neofetch");
    let text = renderer.plain_text();
    assert!(text.contains("guest@portfolio"));
    assert!(text.contains("User:"));
    assert!(text.contains("OS:"));
}

#[test]
fn test_content_commands_render_configured_content() {
    let mut session = new_session();
    for cmd in ["projects", "skills", "about", "contact", "resume"] {
        let renderer = run_command(&mut session, cmd);
        assert!(
            !renderer.plain_text().trim().is_empty(),
            "{} should render content",
            cmd
        );
    }
}

#[test]
fn test_history_command_numbers_from_one() {
    let mut session = new_session();
    let mut renderer = RecordingRenderer::new();
    run_line(&mut session, &mut renderer, "echo a");
    run_line(&mut session, &mut renderer, "whoami");
    let renderer = run_command(&mut session, "history");
    let lines = renderer.lines();
    assert!(lines.iter().any(|l| l.trim_start().starts_with("1") && l.contains("echo a")));
    assert!(lines.iter().any(|l| l.trim_start().starts_with("2") && l.contains("whoami")));
    // The history command itself is recorded before it runs
    assert!(lines.iter().any(|l| l.contains("history")));
}

#[test]
fn test_unknown_command_uses_bash_wording() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "frobnicate now");
    assert!(renderer
        .lines()
        .contains(&"bash: frobnicate: command not found".to_string()));
}

#[test]
fn test_dispatch_is_case_insensitive_for_command_token_only() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "Echo CasePreserved");
    assert!(
        renderer.lines().contains(&"CasePreserved".to_string()),
        "arguments must keep their original case"
    );
}

#[test]
fn test_every_non_restart_command_ends_with_prompt() {
    let commands = [
        "help", "clear", "echo hi", "whoami", "date", "uname", "banner", "neofetch",
        "projects", "skills", "about", "contact", "resume", "history",
    ];
    for cmd in commands {
        let mut session = new_session();
        let renderer = run_command(&mut session, cmd);
        let text = renderer.plain_text();
        assert!(
            text.trim_end().ends_with("guest@portfolio:~$"),
            "{} should leave a trailing prompt, got: {:?}",
            cmd,
            text
        );
    }
}

#[test]
fn test_leading_and_trailing_whitespace_trimmed_before_dispatch() {
    let mut session = new_session();
    let renderer = run_command(&mut session, "   echo trimmed   ");
    assert!(renderer.lines().contains(&"trimmed".to_string()));
    assert_eq!(
        session.history().entries().collect::<Vec<_>>(),
        vec!["echo trimmed"],
        "history keeps the trimmed raw input"
    );
}
