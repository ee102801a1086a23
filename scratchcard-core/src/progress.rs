use crate::error::{Result, ScratchError};
use crate::surface::OverlaySurface;

/// Tracks how much of one card's overlay has been erased.
#[derive(Debug, Clone)]
pub struct ScratchProgressTracker<S> {
    surface: S,
    erased_fraction: f64,
}

impl<S: OverlaySurface> ScratchProgressTracker<S> {
    pub fn new(surface: S) -> Result<Self> {
        if surface.total_units() == 0 {
            return Err(ScratchError::EmptySurface);
        }

        Ok(Self {
            surface,
            erased_fraction: 0.0,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn erased_fraction(&self) -> f64 {
        self.erased_fraction
    }

    /// Erases a disc and returns the updated fraction. Never decreases.
    pub fn on_erase(&mut self, x: f64, y: f64, radius: f64) -> f64 {
        self.surface.erase_disc(x, y, radius);

        let sampled =
            self.surface.transparent_units() as f64 / self.surface.total_units() as f64;
        self.erased_fraction = self.erased_fraction.max(sampled.min(1.0));
        self.erased_fraction
    }

    /// Clears whatever overlay is left.
    pub fn finish(&mut self) {
        self.surface.clear();
        self.erased_fraction = 1.0;
    }

    /// Repaints the overlay and zeroes progress.
    pub fn reset(&mut self) {
        self.surface.repaint();
        self.erased_fraction = 0.0;
    }
}
