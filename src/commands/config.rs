//! Config subcommands handler

use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use tmix::config::migrate_config;
use tmix::theme::Theme;
use tmix::Config;

use super::cli_theme;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = Theme::named(config.ui.theme);
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Open configuration file in `$EDITOR` (defaults to `vi`).
///
/// Writes the default config first when the file does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = cli_theme();

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!("Opening {} with {}", config_path.display(), editor))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        tracing::warn!(%status, "editor exited with an error");
    }
    Ok(())
}

/// Add fields missing from the config file.
///
/// Prints the lines that would be added, then asks before writing unless
/// `yes` is set. Without a terminal and without `yes`, nothing is written.
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = cli_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    let question = if file_exists {
        let summary = if result.sections_added.is_empty() {
            format!("Found {} missing field(s):", result.added_fields.len())
        } else {
            format!(
                "Found {} missing field(s) in {} new section(s):",
                result.added_fields.len(),
                result.sections_added.len()
            )
        };
        println!("{}", theme.primary_text(&summary));
        format!("Apply these changes to {}?", config_path.display())
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
        format!("Create {}?", config_path.display())
    };
    println!();
    for line in added_lines(&result.content, &result.added_fields, !file_exists) {
        println!("{}", theme.success_text(&line));
    }
    println!();

    if !yes && !prompt_confirmation(&question, &theme)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write config {}", config_path.display()))?;

    let done = if file_exists {
        "Config updated successfully."
    } else {
        "Config file created successfully."
    };
    println!("{}", theme.success_text(done));
    Ok(())
}

/// Diff-style `+` lines for the fields a migration adds.
///
/// Section headers are included for sections that gained fields. For a new
/// file every non-empty line counts as added.
fn added_lines(new_content: &str, added_fields: &[String], is_new_file: bool) -> Vec<String> {
    let added: HashSet<&str> = added_fields.iter().map(String::as_str).collect();
    let mut lines = Vec::new();
    let mut section = String::new();
    let mut pending_header: Option<&str> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed[1..trimmed.len() - 1].trim().to_string();
            pending_header = Some(line);
            continue;
        }

        let is_added = match trimmed.split_once('=') {
            Some((key, _)) => added.contains(format!("{}.{}", section, key.trim()).as_str()),
            None => false,
        };
        if is_new_file || is_added {
            if let Some(header) = pending_header.take() {
                lines.push(format!("+ {}", header));
            }
            lines.push(format!("+ {}", line));
        }
    }
    lines
}

/// Ask a yes/no question on stdin. Non-interactive stdin answers no.
fn prompt_confirmation(message: &str, theme: &Theme) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_lines_show_only_new_fields_with_their_header() {
        let content = "[defaults]\npercent = 30\ninterval = 0\n\n[ui]\ntheme = \"dark\"\n";
        let added = vec!["defaults.interval".to_string()];
        assert_eq!(
            added_lines(content, &added, false),
            vec!["+ [defaults]", "+ interval = 0"]
        );
    }

    #[test]
    fn added_lines_for_new_file_include_everything() {
        let content = "[ui]\ntheme = \"dark\"\ntick_rate_ms = 250\n";
        assert_eq!(
            added_lines(content, &[], true),
            vec!["+ [ui]", "+ theme = \"dark\"", "+ tick_rate_ms = 250"]
        );
    }

    #[test]
    fn added_lines_ignore_same_key_in_other_section() {
        let content = "[defaults]\nmode = \"simple\"\n[other]\nmode = \"x\"\n";
        let added = vec!["other.mode".to_string()];
        assert_eq!(added_lines(content, &added, false), vec!["+ [other]", "+ mode = \"x\""]);
    }
}
