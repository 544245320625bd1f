//! Terminal bell feedback.

use super::{Cue, Feedback};
use crate::error::{Result, ShellError};
use std::io::Write;
use std::sync::Mutex;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell on click. Hover is silent.
pub struct BellFeedback {
    out: Mutex<Box<dyn Write + Send>>,
}

impl BellFeedback {
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Feedback for BellFeedback {
    fn try_play(&self, cue: Cue) -> Result<()> {
        if cue == Cue::Hover {
            return Ok(());
        }
        let mut out = self
            .out
            .lock()
            .map_err(|_| ShellError::Audio("bell writer poisoned".into()))?;
        out.write_all(BEL)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bell"
    }
}
