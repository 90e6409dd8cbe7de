//! "Copied!" confirmation state of the badge copy controls
//!
//! Each badge format owns one control. A successful write moves it to
//! `Confirmed` with a fresh generation; a reset timer carrying that generation
//! moves it back to `Idle`. Expiries carrying an older generation are stale and
//! leave the state alone.

use conan_core::BadgeFormat;

/// State of one copy control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Confirmed {
        generation: u64,
    },
}

impl CopyFeedback {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CopyFeedback::Confirmed { .. })
    }
}

/// Copy controls for every badge format
#[derive(Debug, Clone, Default)]
pub struct CopyFeedbackSet {
    controls: [CopyFeedback; 4],
    last_generation: u64,
}

impl CopyFeedbackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, format: BadgeFormat) -> CopyFeedback {
        self.controls[format.index()]
    }

    pub fn is_confirmed(&self, format: BadgeFormat) -> bool {
        self.get(format).is_confirmed()
    }

    /// Mark a successful copy. Returns the generation the reset timer must carry.
    pub fn confirm(&mut self, format: BadgeFormat) -> u64 {
        self.last_generation += 1;
        let generation = self.last_generation;
        self.controls[format.index()] = CopyFeedback::Confirmed { generation };
        generation
    }

    /// Apply a reset timer expiry.
    ///
    /// Returns `true` when the control went back to `Idle`.
    pub fn expire(&mut self, format: BadgeFormat, generation: u64) -> bool {
        let control = &mut self.controls[format.index()];
        if *control == (CopyFeedback::Confirmed { generation }) {
            *control = CopyFeedback::Idle;
            true
        } else {
            false
        }
    }
}
