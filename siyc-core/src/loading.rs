//! Boot progress bar shown before the first page.

use rand::Rng;

pub const TICK_MS: u32 = 120;
/// Pause after reaching 100% before the screen starts fading.
pub const SETTLE_MS: u32 = 500;
/// Fade-out duration before the home page is shown.
pub const REVEAL_MS: u32 = 1_000;
pub const MILESTONES: [f64; 4] = [25.0, 50.0, 75.0, 100.0];

const MIN_STEP: f64 = 0.8;

#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Increment for one tick given the current progress and a sample `r` in `[0, 1)`.
#[must_use]
pub fn step(progress: f64, r: f64) -> f64 {
    (r * (100.0 - progress) * 0.15 + 2.0).max(MIN_STEP)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingProgress {
    progress: f64,
}

impl LoadingProgress {
    #[must_use]
    pub const fn new() -> Self {
        Self { progress: 0.0 }
    }

    /// Advance one tick. Returns `true` once progress reaches 100.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.is_complete() {
            return true;
        }
        let r = rng.gen_range(0.0..1.0);
        self.progress = (self.progress + step(self.progress, r)).min(100.0);
        if self.is_complete() {
            log::debug!("loading: complete");
        }
        self.is_complete()
    }

    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    /// Eased bar width in percent.
    #[must_use]
    pub fn bar_width(&self) -> f64 {
        ease_out_cubic(self.progress / 100.0) * 100.0
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.progress.floor())
    }

    /// Which milestone dots are lit.
    #[must_use]
    pub fn dots(&self) -> [bool; 4] {
        MILESTONES.map(|m| self.progress >= m)
    }
}
