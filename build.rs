//! Embeds version metadata for `tmix --version`.
//!
//! `TMIX_BUILD_DATE` is always set. `VERGEN_GIT_SHA` is only set for dev
//! builds; the `release` feature keeps the version string free of a hash.

use std::process::Command;

fn build_date() -> String {
    Command::new("date")
        .arg("+%Y-%m-%d")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(|e| e.to_string())
        });

    if let Err(e) = emitted {
        println!("cargo:warning=git metadata unavailable: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

fn main() {
    println!("cargo:rustc-env=TMIX_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}
