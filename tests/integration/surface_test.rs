//! Integration tests for help, version and completions

use crate::helpers::TestEnv;

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["run", "ui", "config", "completions"] {
        assert!(stdout.contains(name), "missing {}", name);
    }
}

#[test]
fn run_help_shows_options() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["run", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--percent"));
    assert!(stdout.contains("--interval"));
    assert!(stdout.contains("--advanced"));
    assert!(stdout.contains("--seed"));
}

#[test]
fn version_starts_with_package_version() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with(&format!("tmix {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn completions_are_generated_for_bash() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("_tmix"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}
