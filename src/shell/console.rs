use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

/// Line-oriented text output shared by the screens and the alert presenter.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Write one line. Output failures are logged and otherwise ignored.
    pub fn line(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            warn!(error = %err, "console write failed");
        }
    }
}
