/// Fallback bounding width when the configured value is unusable.
pub const DEFAULT_BOUND_WIDTH: u32 = 800;
/// Fallback bounding height when the configured value is unusable.
pub const DEFAULT_BOUND_HEIGHT: u32 = 600;

/// Computes the largest size with the image's aspect ratio that fits inside
/// the configured bounding box ("contain" fit). Exactly one output dimension
/// equals its bound; the other is scaled to preserve the ratio.
///
/// Non-positive bounds fall back to 800/600 per dimension.
pub fn fit_within(image_w: u32, image_h: u32, bound_w: i32, bound_h: i32) -> (u32, u32) {
    let bound_w = if bound_w <= 0 {
        DEFAULT_BOUND_WIDTH
    } else {
        bound_w as u32
    };
    let bound_h = if bound_h <= 0 {
        DEFAULT_BOUND_HEIGHT
    } else {
        bound_h as u32
    };

    let image_aspect = f64::from(image_w) / f64::from(image_h);
    let bound_aspect = f64::from(bound_w) / f64::from(bound_h);

    if image_aspect > bound_aspect {
        // Image is relatively wider than the box: width touches the bound.
        (bound_w, (f64::from(bound_w) / image_aspect).round() as u32)
    } else {
        ((f64::from(bound_h) * image_aspect).round() as u32, bound_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_pins_width() {
        assert_eq!(fit_within(1920, 1080, 800, 600), (800, 450));
    }

    #[test]
    fn tall_image_pins_height() {
        assert_eq!(fit_within(600, 800, 800, 600), (450, 600));
    }

    #[test]
    fn matching_aspect_fills_box() {
        assert_eq!(fit_within(800, 600, 800, 600), (800, 600));
    }

    #[test]
    fn upscales_small_images() {
        assert_eq!(fit_within(8, 6, 800, 600), (800, 600));
    }

    #[test]
    fn zero_bound_uses_default_for_that_dimension() {
        assert_eq!(fit_within(1920, 1080, 0, 600), (800, 450));
        assert_eq!(fit_within(600, 800, 800, 0), (450, 600));
        assert_eq!(fit_within(1920, 1080, 0, 0), (800, 450));
    }

    #[test]
    fn negative_bounds_use_defaults() {
        assert_eq!(fit_within(800, 600, -10, -10), (800, 600));
    }

    #[test]
    fn output_fits_bounds_and_keeps_ratio() {
        for &(iw, ih) in &[(1u32, 1u32), (7, 13), (31, 17), (640, 480), (3000, 200), (200, 3000)] {
            for &(bw, bh) in &[(1i32, 1i32), (100, 100), (800, 600), (600, 800), (1920, 1080)] {
                let (ow, oh) = fit_within(iw, ih, bw, bh);
                assert!(ow <= bw as u32, "{ow} > {bw} for image {iw}x{ih}");
                assert!(oh <= bh as u32, "{oh} > {bh} for image {iw}x{ih}");
                assert!(ow == bw as u32 || oh == bh as u32);
                // Rounding shifts the ratio by at most half a pixel in one
                // dimension.
                if ow > 0 && oh > 0 {
                    let want = f64::from(iw) / f64::from(ih);
                    let got = f64::from(ow) / f64::from(oh);
                    let tolerance = 0.5 / f64::from(oh.min(ow)) * want.max(1.0) * 2.0;
                    assert!(
                        (want - got).abs() <= tolerance.max(0.05),
                        "ratio drift: image {iw}x{ih} bounds {bw}x{bh} -> {ow}x{oh}"
                    );
                }
            }
        }
    }
}
