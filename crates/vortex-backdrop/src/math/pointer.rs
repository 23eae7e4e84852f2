//! Smoothed pointer tracking

use super::Viewport;

/// Pointer position eased toward the last observed target
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedPointer {
    /// Current smoothed position (CSS px)
    pub x: f64,
    pub y: f64,
    /// Latest observed position (CSS px)
    pub target_x: f64,
    pub target_y: f64,
}

impl SmoothedPointer {
    /// Create a pointer resting at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new pointer or touch position
    pub fn set_target(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.target_x = x;
            self.target_y = y;
        }
    }

    /// Advance one frame toward the target.
    ///
    /// `factor` must lie in (0, 1]; the step never passes the target.
    pub fn step(&mut self, factor: f64) {
        let factor = factor.clamp(0.0, 1.0);
        self.x += (self.target_x - self.x) * factor;
        self.y += (self.target_y - self.y) * factor;
    }

    /// Distance between the smoothed position and the target
    pub fn distance_to_target(&self) -> f64 {
        (self.target_x - self.x).hypot(self.target_y - self.y)
    }

    /// Position in surface coordinates: x grows right, y grows up, both in [0, 1]
    /// for on-screen pointers
    pub fn normalized(&self, viewport: &Viewport) -> [f32; 2] {
        let width = if viewport.width > 0.0 { viewport.width } else { 1.0 };
        let height = if viewport.height > 0.0 { viewport.height } else { 1.0 };
        [(self.x / width) as f32, (1.0 - self.y / height) as f32]
    }
}
