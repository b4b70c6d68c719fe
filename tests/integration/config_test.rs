//! Integration tests for `tmix config`

use crate::helpers::TestEnv;

#[test]
fn show_without_file_prints_defaults() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[defaults]"));
    assert!(stdout.contains("percent = 30"));
    assert!(stdout.contains("tick_rate_ms = 250"));
    assert!(stdout.contains("copy_on_generate = false"));
}

#[test]
fn show_reflects_file_values() {
    let env = TestEnv::new();
    env.write_config("[defaults]\npercent = 75\n\n[ui]\ntheme = \"light\"\n");
    let (stdout, _stderr, exit_code) = env.run(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("percent = 75"));
    assert!(stdout.contains("theme = \"light\""));
}

#[test]
fn migrate_without_yes_in_non_interactive_mode_writes_nothing() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["config", "migrate"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config file does not exist"));
    assert!(stdout.contains("use --yes"));
    assert!(stdout.contains("No changes made."));
    assert!(env.read_config().is_none());
}

#[test]
fn migrate_yes_creates_missing_file() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("+ [defaults]"));
    assert!(stdout.contains("Config file created successfully."));

    let content = env.read_config().expect("config written");
    assert!(content.contains("percent = 30"));

    let (stdout, _stderr, _code) = env.run(&["config", "migrate", "--yes"]);
    assert!(stdout.contains("Config is already up to date."));
}

#[test]
fn migrate_yes_adds_fields_and_keeps_comments() {
    let env = TestEnv::new();
    env.write_config("# my settings\n[defaults]\npercent = 80 # loud\n");
    let (stdout, _stderr, exit_code) = env.run(&["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("in 2 new section(s)"));
    assert!(stdout.contains("+ interval = 0"));
    assert!(!stdout.contains("+ percent"));

    let content = env.read_config().unwrap();
    assert!(content.contains("# my settings"));
    assert!(content.contains("percent = 80 # loud"));
    assert!(content.contains("interval = 0"));
    assert!(content.contains("[ui]"));
    assert!(content.contains("[clipboard]"));
}
