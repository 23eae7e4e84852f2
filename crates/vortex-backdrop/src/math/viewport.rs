//! Viewport and surface sizing

/// Browser viewport in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// `innerWidth`
    pub width: f64,
    /// `innerHeight`
    pub height: f64,
    /// `devicePixelRatio` as reported; may be 0 or NaN on odd hosts
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl Viewport {
    /// Create a viewport
    pub const fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self { width, height, device_pixel_ratio }
    }

    /// Pixel ratio used for the surface, capped at `cap`.
    ///
    /// A missing, zero, negative or non-finite ratio counts as 1.0.
    pub fn pixel_ratio(&self, cap: f64) -> f64 {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        dpr.min(cap)
    }

    /// Drawing surface size for this viewport
    pub fn surface_size(&self, cap: f64) -> SurfaceSize {
        let dpr = self.pixel_ratio(cap);
        SurfaceSize::new(to_pixels(self.width * dpr), to_pixels(self.height * dpr))
    }
}

/// Truncate like a canvas `width`/`height` assignment does
fn to_pixels(css: f64) -> u32 {
    if css.is_finite() && css > 0.0 {
        css.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Drawing surface size in physical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Create a surface size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, 1.0 for a zero-height surface
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_capped() {
        assert!((Viewport::new(800.0, 600.0, 3.0).pixel_ratio(1.5) - 1.5).abs() < 1e-9);
        assert!((Viewport::new(800.0, 600.0, 1.25).pixel_ratio(1.5) - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_pixel_ratio_fallback() {
        assert!((Viewport::new(800.0, 600.0, 0.0).pixel_ratio(1.5) - 1.0).abs() < 1e-9);
        assert!((Viewport::new(800.0, 600.0, f64::NAN).pixel_ratio(1.5) - 1.0).abs() < 1e-9);
        assert!((Viewport::new(800.0, 600.0, -2.0).pixel_ratio(1.5) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_surface_size() {
        let size = Viewport::new(1024.0, 768.0, 2.0).surface_size(1.5);
        assert_eq!(size, SurfaceSize::new(1536, 1152));

        let size = Viewport::new(333.0, 201.0, 1.5).surface_size(1.5);
        assert_eq!(size, SurfaceSize::new(499, 301));
    }

    #[test]
    fn test_surface_size_degenerate() {
        let size = Viewport::new(0.0, 0.0, 1.0).surface_size(1.5);
        assert!(size.is_empty());
        assert!((size.aspect_ratio() - 1.0).abs() < f32::EPSILON);

        let size = Viewport::new(f64::INFINITY, -5.0, 1.0).surface_size(1.5);
        assert_eq!(size.height, 0);
    }

    #[test]
    fn test_aspect_ratio() {
        assert!((SurfaceSize::new(1920, 1080).aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
        assert!((SurfaceSize::new(1920, 0).aspect_ratio() - 1.0).abs() < f32::EPSILON);
    }
}
