//! Interaction Feedback
//!
//! Audio cues for hover and click. Playing a cue is fire-and-forget: a
//! backend that fails reports it through [`Feedback::try_play`], and the
//! public triggers log the failure and carry on.

mod bell;
#[cfg(feature = "sound")]
mod tone;

pub use bell::BellFeedback;
#[cfg(feature = "sound")]
pub use tone::ToneFeedback;

use crate::config::{SoundBackend, SoundConfig};
use crate::error::Result;

/// Which interaction produced the cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Hover,
    Click,
}

/// Source of interaction sounds
#[cfg_attr(test, mockall::automock)]
pub trait Feedback {
    /// Attempt to play a cue. Must return promptly.
    fn try_play(&self, cue: Cue) -> Result<()>;

    fn name(&self) -> &'static str;
}

/// Play a cue, absorbing any failure
pub fn play(feedback: &dyn Feedback, cue: Cue) {
    if let Err(e) = feedback.try_play(cue) {
        tracing::debug!("{} feedback failed for {:?}: {}", feedback.name(), cue, e);
    }
}

/// Backend that never makes a sound
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn try_play(&self, _cue: Cue) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "silent"
    }
}

/// Build the backend selected by configuration.
///
/// Never fails: an unavailable backend degrades to a quieter one.
pub fn from_config(config: &SoundConfig) -> Box<dyn Feedback> {
    match config.effective_backend() {
        SoundBackend::Silent => Box::new(SilentFeedback),
        SoundBackend::Bell => Box::new(BellFeedback::stdout()),
        SoundBackend::Tone => tone_or_fallback(config.volume),
    }
}

#[cfg(feature = "sound")]
fn tone_or_fallback(volume: f32) -> Box<dyn Feedback> {
    match ToneFeedback::open(volume) {
        Ok(tone) => Box::new(tone),
        Err(e) => {
            tracing::info!("Tone feedback unavailable, using silent: {}", e);
            Box::new(SilentFeedback)
        }
    }
}

#[cfg(not(feature = "sound"))]
fn tone_or_fallback(_volume: f32) -> Box<dyn Feedback> {
    tracing::info!("Built without the `sound` feature, using bell feedback");
    Box::new(BellFeedback::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_play_swallows_errors() {
        let mut mock = MockFeedback::new();
        mock.expect_try_play()
            .times(1)
            .returning(|_| Err(ShellError::Audio("blocked".into())));
        mock.expect_name().return_const("mock");

        play(&mock, Cue::Click);
    }

    #[test]
    fn test_silent_is_ok() {
        assert!(SilentFeedback.try_play(Cue::Hover).is_ok());
        assert!(SilentFeedback.try_play(Cue::Click).is_ok());
    }

    #[test]
    fn test_disabled_sound_builds_silent() {
        let config = SoundConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(from_config(&config).name(), "silent");
    }

    #[test]
    fn test_bell_backend_from_config() {
        let config = SoundConfig {
            backend: SoundBackend::Bell,
            ..Default::default()
        };
        assert_eq!(from_config(&config).name(), "bell");
    }
}
