/// Rectangle of the complex plane mapped onto the raster.
///
/// Degenerate or inverted bounds are accepted as-is: deep zooms are allowed to
/// collapse in floating point and simply produce a degraded image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub re_start: f64,
    pub re_end: f64,
    pub im_start: f64,
    pub im_end: f64,
}

/// Absolute tolerance under which two bounds count as the same view.
pub const SAME_VIEW_TOLERANCE: f64 = 1e-9;

impl Bounds {
    #[must_use]
    pub const fn new(re_start: f64, re_end: f64, im_start: f64, im_end: f64) -> Self {
        Self {
            re_start,
            re_end,
            im_start,
            im_end,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.re_end - self.re_start
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.im_end - self.im_start
    }

    #[must_use]
    pub fn centre(&self) -> (f64, f64) {
        (
            (self.re_start + self.re_end) / 2.0,
            (self.im_start + self.im_end) / 2.0,
        )
    }

    /// True when every edge is strictly within `tolerance` of the matching edge of `other`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.re_start - other.re_start).abs() < tolerance
            && (self.re_end - other.re_end).abs() < tolerance
            && (self.im_start - other.im_start).abs() < tolerance
            && (self.im_end - other.im_end).abs() < tolerance
    }

    /// Same centre, both extents multiplied by `factor`.
    #[must_use]
    pub fn zoomed(&self, factor: f64) -> Self {
        let (centre_re, centre_im) = self.centre();
        let half_width = self.width() * factor / 2.0;
        let half_height = self.height() * factor / 2.0;

        Self {
            re_start: centre_re - half_width,
            re_end: centre_re + half_width,
            im_start: centre_im - half_height,
            im_end: centre_im + half_height,
        }
    }

    /// Bounds after the raster content moved by `(dx, dy)` pixels.
    ///
    /// One pixel spans `extent / pixels` here, not `extent / (pixels - 1)` as in
    /// the sample grid.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32, width: u32, height: u32) -> Self {
        let scale_re = self.width() / f64::from(width);
        let scale_im = self.height() / f64::from(height);
        let shift_re = f64::from(dx) * scale_re;
        let shift_im = f64::from(dy) * scale_im;

        Self {
            re_start: self.re_start - shift_re,
            re_end: self.re_end - shift_re,
            im_start: self.im_start - shift_im,
            im_end: self.im_end - shift_im,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let bounds = Bounds::new(-2.5, 1.5, -1.2, 1.2);

        assert_eq!(bounds.width(), 4.0);
        assert!((bounds.height() - 2.4).abs() < 1e-12);
        assert_eq!(bounds.centre(), (-0.5, 0.0));
    }

    #[test]
    fn test_approx_eq_within_tolerance() {
        let a = Bounds::new(-2.0, 1.0, -1.0, 1.0);
        let b = Bounds::new(-2.0 + 1e-10, 1.0 - 1e-10, -1.0, 1.0 + 5e-10);

        assert!(a.approx_eq(&b, SAME_VIEW_TOLERANCE));
    }

    #[test]
    fn test_approx_eq_rejects_any_single_edge_outside_tolerance() {
        let a = Bounds::new(-2.0, 1.0, -1.0, 1.0);
        let edges = [
            Bounds::new(-2.0 + 1e-8, 1.0, -1.0, 1.0),
            Bounds::new(-2.0, 1.0 + 1e-8, -1.0, 1.0),
            Bounds::new(-2.0, 1.0, -1.0 - 1e-8, 1.0),
            Bounds::new(-2.0, 1.0, -1.0, 1.0 - 1e-8),
        ];

        for other in edges {
            assert!(!a.approx_eq(&other, SAME_VIEW_TOLERANCE), "{:?}", other);
        }
    }

    #[test]
    fn test_zoomed_keeps_centre() {
        let bounds = Bounds::new(-2.0, 2.0, -1.0, 1.0);
        let zoomed = bounds.zoomed(0.5);

        assert_eq!(zoomed, Bounds::new(-1.0, 1.0, -0.5, 0.5));
        assert_eq!(zoomed.centre(), bounds.centre());
    }

    #[test]
    fn test_translated_moves_by_pixel_span() {
        let bounds = Bounds::new(0.0, 4.0, 0.0, 2.0);
        let moved = bounds.translated(2, -1, 4, 2);

        // one pixel is 1.0 wide and 1.0 tall
        assert_eq!(moved, Bounds::new(-2.0, 2.0, 1.0, 3.0));
    }

    #[test]
    fn test_translated_round_trip() {
        let bounds = Bounds::new(-2.5, 1.5, -1.2, 1.2);
        let back = bounds.translated(17, -9, 1100, 600).translated(-17, 9, 1100, 600);

        assert!(bounds.approx_eq(&back, 1e-12));
    }
}
