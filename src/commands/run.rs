//! One-shot transform.

use std::io::{self, Read};

use anyhow::{bail, Context, Result};

use tmix::cli::RunArgs;
use tmix::clipboard::Copy;
use tmix::{Config, Mode, Pipeline, TransformRequest};

use super::cli_theme;

/// Transform the given text and print the result to stdout.
///
/// Options left unset fall back to the `[defaults]` config section.
pub fn handle(args: RunArgs) -> Result<()> {
    let config = Config::load()?;
    let text = read_text(&args)?;

    let mode = if args.advanced {
        Mode::Advanced
    } else {
        config.defaults.mode
    };
    let request = TransformRequest::new(text)
        .with_percent(args.percent.unwrap_or(config.defaults.percent))
        .with_interval(args.interval.unwrap_or(config.defaults.interval))
        .with_mode(mode);

    let mut pipeline = match args.seed {
        Some(seed) => Pipeline::seeded(seed),
        None => Pipeline::from_entropy(),
    };
    let result = pipeline.transform(&request)?;
    println!("{}", result);

    if args.copy || config.clipboard.copy_on_generate {
        copy_result(&result);
    }
    Ok(())
}

/// Text from the argument, or stdin when asked for or piped.
fn read_text(args: &RunArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if args.stdin || !atty::is(atty::Stream::Stdin) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        return Ok(text);
    }
    bail!("No text given. Pass it as an argument or pipe it in with --stdin")
}

/// Copy to the clipboard. Failure is reported but does not fail the command.
fn copy_result(result: &str) {
    let theme = cli_theme();
    match Copy::new().text(result) {
        Ok(copied) => eprintln!("{}", theme.success_text(&copied.message())),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            eprintln!("{} {}", theme.error_text("warning:"), e);
        }
    }
}
