//! Scroll progress

/// Page scroll measurements
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// `window.scrollY`
    pub scroll_y: f64,
    /// `document.documentElement.scrollHeight`
    pub scroll_height: f64,
    /// `window.innerHeight`
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Create scroll metrics
    pub const fn new(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self { scroll_y, scroll_height, viewport_height }
    }

    /// Normalized scroll progress in [0, 1]
    pub fn progress(&self) -> f32 {
        let max_scroll = (self.scroll_height - self.viewport_height).max(1.0);
        let progress = self.scroll_y / max_scroll;
        if progress.is_nan() {
            return 0.0;
        }
        progress.clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_midway() {
        let scroll = ScrollMetrics::new(500.0, 2000.0, 1000.0);
        assert!((scroll.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_progress_page_fits_viewport() {
        // scrollHeight == innerHeight: floor of 1 avoids dividing by zero
        let scroll = ScrollMetrics::new(0.0, 768.0, 768.0);
        assert_eq!(scroll.progress(), 0.0);

        let scroll = ScrollMetrics::new(4.0, 768.0, 768.0);
        assert_eq!(scroll.progress(), 1.0);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(ScrollMetrics::new(-40.0, 3000.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(9000.0, 3000.0, 800.0).progress(), 1.0);
        assert_eq!(ScrollMetrics::new(f64::NAN, 3000.0, 800.0).progress(), 0.0);
    }
}
