use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tallybar::{Bar, BarBuilder, Glyphs, Token};
use tracing_subscriber::fmt::MakeWriter;

// Common test constants
pub const NO_VERBS: &[&str] = &[];
pub const TEST_WIDTH: usize = 10;

// === Token Helpers ===

/// Creates a literal token
pub fn literal(content: &str) -> Token {
    Token::Literal {
        content: content.to_string(),
    }
}

/// Creates a custom verb token
pub fn custom(verb: &str) -> Token {
    Token::CustomVerb {
        verb: verb.to_string(),
    }
}

// === Bar Helpers ===

/// Glyphs that never overlap, so each piece of a bar can be counted
pub fn create_test_glyphs() -> Glyphs {
    Glyphs::new("[", "]", "=", ">", "-")
}

/// Creates a bar with test glyphs and the given format
pub fn create_test_bar(total: u64, format: &str, verbs: &[&str]) -> Bar {
    BarBuilder::new()
        .total(total)
        .width(TEST_WIDTH)
        .glyphs(create_test_glyphs())
        .format(format)
        .custom_verbs(verbs.iter().copied())
        .build()
        .expect("Failed to build test bar")
}

/// Moves a bar to `progress` as if `secs` seconds had passed since it started
pub fn advance(bar: &mut Bar, progress: u64, secs: u64) {
    let now = bar.started() + Duration::from_secs(secs);
    bar.update_at(progress, now);
}

// === Log Capture ===

/// In-memory writer collecting formatted tracing output
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("Log buffer poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("Log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a subscriber that records WARN and above, returning its
/// result along with everything that was logged
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
