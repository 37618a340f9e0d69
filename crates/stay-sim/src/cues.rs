//! Randomized audio cue selection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// A chosen cue and the pitch to play it at.
#[derive(Debug, Clone, PartialEq)]
pub struct CueChoice {
    pub id: String,
    pub pitch: f32,
}

/// Picks one clip uniformly from a list, with a random pitch in range.
#[derive(Debug, Clone, PartialEq)]
pub struct CuePicker {
    clips: Vec<String>,
    pitch_min: f32,
    pitch_max: f32,
}

impl CuePicker {
    /// `pitch_min > pitch_max` collapses to `pitch_min`.
    pub fn new(clips: Vec<String>, pitch_min: f32, pitch_max: f32) -> Self {
        Self {
            clips,
            pitch_min,
            pitch_max: pitch_max.max(pitch_min),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// `None` (with a warning) when no clips are configured.
    pub fn pick(&self, rng: &mut ChaCha8Rng) -> Option<CueChoice> {
        if self.clips.is_empty() {
            warn!("no audio clips assigned; cue skipped");
            return None;
        }
        let index = rng.gen_range(0..self.clips.len());
        let pitch = if self.pitch_max > self.pitch_min {
            rng.gen_range(self.pitch_min..=self.pitch_max)
        } else {
            self.pitch_min
        };
        Some(CueChoice {
            id: self.clips[index].clone(),
            pitch,
        })
    }
}
