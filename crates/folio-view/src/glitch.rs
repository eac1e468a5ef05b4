//! Hero title glitch effect.
//!
//! Every [`TRIGGER_PERIOD`] an idle title starts glitching with probability
//! [`TRIGGER_PROBABILITY`]. A glitch runs [`TOTAL_FRAMES`] frames of
//! [`FRAME_PERIOD`]: the first [`SCRAMBLE_FRAMES`] replace each character with
//! a random [`GLITCH_CHARSET`] character with probability
//! [`SUBSTITUTION_PROBABILITY`], the rest show the original text.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const GLITCH_CHARSET: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const TRIGGER_PERIOD: Duration = Duration::from_secs(3);
pub const TRIGGER_PROBABILITY: f64 = 0.1;
pub const FRAME_PERIOD: Duration = Duration::from_millis(100);
pub const SCRAMBLE_FRAMES: u32 = 10;
pub const TOTAL_FRAMES: u32 = 15;
pub const SUBSTITUTION_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct GlitchText<R = StdRng> {
    original: String,
    shown: String,
    /// Next frame to render while glitching.
    frame: Option<u32>,
    rng: R,
}

impl GlitchText<StdRng> {
    /// Glitch text seeded from the OS.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_rng(text, StdRng::from_os_rng())
    }
}

impl<R: Rng> GlitchText<R> {
    #[must_use]
    pub fn with_rng(text: impl Into<String>, rng: R) -> Self {
        let original = text.into();
        Self {
            shown: original.clone(),
            original,
            frame: None,
            rng,
        }
    }

    /// Text to render right now.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.shown
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub const fn is_glitching(&self) -> bool {
        self.frame.is_some()
    }

    /// The periodic trigger check. Does nothing while a glitch runs.
    /// Returns whether a glitch started.
    pub fn maybe_trigger(&mut self) -> bool {
        if self.is_glitching() || !self.rng.random_bool(TRIGGER_PROBABILITY) {
            return false;
        }
        self.start();
        true
    }

    /// Start a glitch unconditionally, unless one is already running.
    pub fn start(&mut self) {
        if self.frame.is_none() {
            self.frame = Some(0);
        }
    }

    /// Render the next frame. Returns `false` once the effect has ended and
    /// the original text is restored.
    pub fn tick(&mut self) -> bool {
        let Some(frame) = self.frame else {
            return false;
        };

        self.shown = if frame < SCRAMBLE_FRAMES {
            self.scramble()
        } else {
            self.original.clone()
        };

        let next = frame + 1;
        if next >= TOTAL_FRAMES {
            self.shown.clone_from(&self.original);
            self.frame = None;
            false
        } else {
            self.frame = Some(next);
            true
        }
    }

    fn scramble(&mut self) -> String {
        let charset = GLITCH_CHARSET.as_bytes();
        let rng = &mut self.rng;
        self.original
            .chars()
            .map(|c| {
                if rng.random_bool(SUBSTITUTION_PROBABILITY) {
                    char::from(charset[rng.random_range(0..charset.len())])
                } else {
                    c
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(text: &str) -> GlitchText<StdRng> {
        GlitchText::with_rng(text, StdRng::seed_from_u64(7))
    }

    #[test]
    fn idle_text_is_original() {
        let mut glitch = seeded("Kenan Alnaser");
        assert_eq!(glitch.text(), "Kenan Alnaser");
        assert!(!glitch.tick());
        assert!(!glitch.is_glitching());
    }

    #[test]
    fn glitch_runs_fifteen_frames_and_restores() {
        let mut glitch = seeded("Kenan Alnaser");
        glitch.start();

        let mut frames = 0;
        while glitch.tick() {
            frames += 1;
            assert!(frames < TOTAL_FRAMES, "effect never ended");
        }
        // the final tick ends the effect
        assert_eq!(frames + 1, TOTAL_FRAMES);
        assert!(!glitch.is_glitching());
        assert_eq!(glitch.text(), "Kenan Alnaser");
    }

    #[test]
    fn scrambled_frames_use_charset_and_keep_length() {
        let mut glitch = seeded("Kenan Alnaser");
        glitch.start();
        let mut changed = false;
        for _ in 0..SCRAMBLE_FRAMES {
            glitch.tick();
            let shown: Vec<char> = glitch.text().chars().collect();
            let original: Vec<char> = glitch.original().chars().collect();
            assert_eq!(shown.len(), original.len());
            for (s, o) in shown.iter().zip(&original) {
                if s != o {
                    changed = true;
                    assert!(GLITCH_CHARSET.contains(*s), "{s} not in charset");
                }
            }
        }
        // 130 draws at p = 0.3
        assert!(changed);
    }

    #[test]
    fn settle_frames_show_original() {
        let mut glitch = seeded("Kenan Alnaser");
        glitch.start();
        for _ in 0..SCRAMBLE_FRAMES {
            glitch.tick();
        }
        for _ in SCRAMBLE_FRAMES..TOTAL_FRAMES - 1 {
            assert!(glitch.tick());
            assert_eq!(glitch.text(), "Kenan Alnaser");
        }
    }

    #[test]
    fn trigger_is_ignored_while_glitching() {
        let mut glitch = seeded("x");
        glitch.start();
        glitch.tick();
        assert!(!glitch.maybe_trigger());
        assert!(glitch.is_glitching());
    }

    #[test]
    fn trigger_fires_about_one_in_ten() {
        let mut glitch = GlitchText::with_rng("x", StdRng::seed_from_u64(42));
        let mut fired = 0;
        for _ in 0..1000 {
            if glitch.maybe_trigger() {
                fired += 1;
                while glitch.tick() {}
            }
        }
        assert!((50..=150).contains(&fired), "fired {fired} times");
    }
}
