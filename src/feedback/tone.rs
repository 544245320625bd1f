//! Synthesized tone feedback through the default audio device.

use super::{Cue, Feedback};
use crate::error::{Result, ShellError};
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Source};
use std::time::Duration;

const HOVER_HZ: f32 = 660.0;
const CLICK_HZ: f32 = 990.0;
const HOVER_MS: u64 = 25;
const CLICK_MS: u64 = 60;

/// Short sine blips mixed into the default output stream.
///
/// Playback is queued on the device's mixer thread, so `try_play` never waits
/// for the tone to finish.
pub struct ToneFeedback {
    // Dropping the stream closes the device
    _stream: OutputStream,
    handle: OutputStreamHandle,
    volume: f32,
}

impl ToneFeedback {
    pub fn open(volume: f32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| ShellError::Audio(e.to_string()))?;
        tracing::debug!("Opened default audio output at volume {}", volume);
        Ok(Self {
            _stream: stream,
            handle,
            volume: volume.clamp(0.0, 1.0),
        })
    }
}

fn tone_for(cue: Cue) -> (f32, Duration) {
    match cue {
        Cue::Hover => (HOVER_HZ, Duration::from_millis(HOVER_MS)),
        Cue::Click => (CLICK_HZ, Duration::from_millis(CLICK_MS)),
    }
}

impl Feedback for ToneFeedback {
    fn try_play(&self, cue: Cue) -> Result<()> {
        let (freq, len) = tone_for(cue);
        let source = SineWave::new(freq)
            .take_duration(len)
            .amplify(self.volume);
        self.handle
            .play_raw(source.convert_samples())
            .map_err(|e| ShellError::Audio(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "tone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_is_higher_and_longer_than_hover() {
        let (hover_hz, hover_len) = tone_for(Cue::Hover);
        let (click_hz, click_len) = tone_for(Cue::Click);
        assert!(click_hz > hover_hz);
        assert!(click_len > hover_len);
    }
}
