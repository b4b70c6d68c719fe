//! Structured logging setup.
//!
//! Logs go to stderr so stdout carries only command output. `RUST_LOG`
//! takes precedence over the `-v` count. The interactive screen owns the
//! terminal, so logging is switched off entirely while it runs. Panics are
//! routed through the same subscriber instead of the default hook.

use tracing_subscriber::EnvFilter;

use crate::pipeline::panic_message;

/// Filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber and panic hook. Safe to call more than once.
pub fn init(verbose: u8, interactive: bool) {
    let filter = if interactive {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    install_panic_hook();
}

/// Report panics as `error` events so the log filter decides whether they
/// reach the terminal.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        match info.location() {
            Some(location) => tracing::error!(%location, %message, "panic"),
            None => tracing::error!(%message, "panic"),
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{transform, TransformError, TransformRequest};
    use rand::RngCore;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct DeadRng;

    impl RngCore for DeadRng {
        fn next_u32(&mut self) -> u32 {
            panic!("entropy unavailable")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("entropy unavailable")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("entropy unavailable")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            panic!("entropy unavailable")
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }

    /// The panic hook is process-wide; tests that swap it take turns.
    static HOOK_LOCK: Mutex<()> = Mutex::new(());

    /// Run a failing transform under `filter` and return what was logged.
    fn failing_transform_logs(filter: &str) -> (Result<String, TransformError>, String) {
        let _guard = HOOK_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let previous = std::panic::take_hook();
        install_panic_hook();
        let request = TransformRequest::new("привет").with_percent(50);
        let outcome = tracing::subscriber::with_default(subscriber, || {
            transform(&request, &mut DeadRng)
        });
        drop(std::panic::take_hook());
        std::panic::set_hook(previous);

        (outcome, buf.contents())
    }

    #[test]
    fn stage_panic_is_reported_through_tracing() {
        let (outcome, logged) = failing_transform_logs("error");

        assert_eq!(outcome, Err(TransformError::Failed));
        assert!(logged.contains("panic"), "log was {:?}", logged);
        assert!(logged.contains("entropy unavailable"));
        assert!(logged.contains("src/logging.rs"));
    }

    #[test]
    fn off_filter_silences_panic_reports() {
        let (outcome, logged) = failing_transform_logs("off");

        assert_eq!(outcome, Err(TransformError::Failed));
        assert!(logged.is_empty(), "log was {:?}", logged);
    }
}
