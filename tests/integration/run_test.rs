//! Integration tests for `tmix run`

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;

use crate::helpers::TestEnv;

// ============================================================================
// Validation
// ============================================================================

#[test]
fn whitespace_only_input_exits_1() {
    let env = TestEnv::new();
    let (stdout, stderr, exit_code) = env.run(&["run", "   "]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    insta::assert_snapshot!(stderr.trim_end(), @"error: Enter some text to transform");
}

#[test]
fn input_over_2000_chars_exits_1() {
    let env = TestEnv::new();
    let text = "а".repeat(2001);
    let (stdout, stderr, exit_code) = env.run(&["run", &text]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    insta::assert_snapshot!(stderr.trim_end(), @"error: Text is too long: 2001 characters (max 2000)");
}

#[test]
fn input_of_exactly_2000_chars_is_accepted() {
    let env = TestEnv::new();
    let text = "а".repeat(2000);
    let (stdout, _stderr, exit_code) = env.run(&["run", &text, "-p", "0"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end_matches('\n'), text);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["run", "  Привет  ", "-p", "0"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "Привет\n");
}

#[test]
fn percent_out_of_range_is_a_usage_error() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&["run", "текст", "-p", "101"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("101"));
}

// ============================================================================
// Transformation
// ============================================================================

#[test]
fn full_percent_replaces_every_covered_letter() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["run", "мама", "-p", "100"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "ᴍaᴍa\n");
}

#[test]
fn urls_survive_full_substitution() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) =
        env.run(&["run", "смотри https://пример.рф/сайт", "-p", "100"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("https://пример.рф/сайт"));
    assert!(!stdout.contains("смотри"));
}

#[test]
fn same_seed_gives_same_output() {
    let env = TestEnv::new();
    let args = [
        "run",
        "[Привет|Здравствуйте] как дела у тебя сегодня",
        "-a",
        "-p",
        "50",
        "-i",
        "2",
        "--seed",
        "42",
    ];
    let (first, _, first_code) = env.run(&args);
    let (second, _, second_code) = env.run(&args);

    assert_eq!(first_code, 0);
    assert_eq!(second_code, 0);
    assert_eq!(first, second);
}

#[test]
fn simple_mode_leaves_templates_alone() {
    let env = TestEnv::new();
    let (stdout, _stderr, _code) = env.run(&["run", "[a|b] c", "-p", "0"]);

    assert_eq!(stdout, "[a|b] c\n");
}

#[test]
fn advanced_mode_picks_one_variant() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["run", "[a|b] c", "-a", "-p", "0", "--seed", "1"]);

    assert_eq!(exit_code, 0);
    assert!(stdout == "a c\n" || stdout == "b c\n", "got {:?}", stdout);
}

#[test]
fn empty_template_group_is_kept() {
    let env = TestEnv::new();
    let (stdout, _stderr, _code) = env.run(&["run", "x [ | ] y", "-a", "-p", "0"]);

    assert_eq!(stdout, "x [ | ] y\n");
}

#[test]
fn interval_one_adds_an_emoji_after_each_word() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["run", "one two three", "-p", "0", "-i", "1", "--seed", "3"]);

    assert_eq!(exit_code, 0);
    let tokens: Vec<&str> = stdout.split_whitespace().collect();
    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0], "one");
    assert_eq!(tokens[2], "two");
    assert_eq!(tokens[4], "three");
}

// ============================================================================
// Input sources and defaults
// ============================================================================

#[test]
fn text_can_come_from_stdin() {
    let env = TestEnv::new();
    AssertCommand::cargo_bin("tmix")
        .unwrap()
        .env("NO_COLOR", "1")
        .env("TMIX_CONFIG", env.config_path())
        .env("TMIX_STATE", env.state_path())
        .args(["run", "--stdin", "-p", "0"])
        .write_stdin("  тест\n")
        .assert()
        .success()
        .stdout("тест\n");
}

#[test]
fn piped_empty_stdin_is_a_validation_error() {
    let env = TestEnv::new();
    AssertCommand::cargo_bin("tmix")
        .unwrap()
        .env("NO_COLOR", "1")
        .env("TMIX_CONFIG", env.config_path())
        .env("TMIX_STATE", env.state_path())
        .arg("run")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Enter some text to transform"));
}

#[test]
fn config_defaults_apply_when_flags_are_absent() {
    let env = TestEnv::new();
    env.write_config("[defaults]\npercent = 0\ninterval = 0\nmode = \"advanced\"\n");
    let (stdout, _stderr, exit_code) = env.run(&["run", "[привет]"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "привет\n");
}

#[test]
fn flags_override_config_defaults() {
    let env = TestEnv::new();
    env.write_config("[defaults]\npercent = 0\n");
    let (stdout, _stderr, _code) = env.run(&["run", "мама", "-p", "100"]);

    assert_eq!(stdout, "ᴍaᴍa\n");
}

#[test]
fn copy_on_generate_copies_without_flag() {
    let env = TestEnv::new();
    env.write_config("[defaults]\npercent = 0\n\n[clipboard]\ncopy_on_generate = true\n");
    let (stdout, stderr, exit_code) = env.run(&["run", "копия"]);

    // The outcome depends on which clipboard tools the host has.
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "копия\n");
    assert!(
        stderr.contains("Copied 5 characters") || stderr.contains("warning:"),
        "stderr was {:?}",
        stderr
    );
}

#[test]
fn copy_is_not_attempted_by_default() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&["run", "копия", "-p", "0"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.is_empty(), "stderr was {:?}", stderr);
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("[defaults\n");
    let (_stdout, stderr, exit_code) = env.run(&["run", "текст"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to parse config"));
}
