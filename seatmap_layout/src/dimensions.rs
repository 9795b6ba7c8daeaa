// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Rect, Size};

/// Natural pixel size of a loaded floor-plan image.
///
/// Both sides are finite and strictly positive; a decoder that reports a
/// zero-sized image yields no `ImageSize`, which keeps the rest of the
/// pipeline in its "not ready" state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    width: f64,
    height: f64,
}

impl ImageSize {
    /// Creates a natural image size, or `None` if either side is zero,
    /// negative, or not finite.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Creates a natural image size from a kurbo [`Size`].
    #[must_use]
    pub fn from_size(size: Size) -> Option<Self> {
        Self::new(size.width, size.height)
    }

    /// Natural width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Natural height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the natural size as a kurbo [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Per-room knobs for [`resolve_display_scale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOptions {
    /// Scale forced when the image is smaller than the container on both axes.
    pub minimum_scale_multiplier: f64,
    /// Extra zoom applied after the base scale has been chosen.
    pub zoom_after_scale: f64,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            minimum_scale_multiplier: 1.5,
            zoom_after_scale: 1.0,
        }
    }
}

/// Rendered size of the floor-plan image after scaling.
///
/// Sides are whole pixels (floored) and may be zero when the container has
/// not been measured yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayDimensions {
    /// Displayed width in pixels.
    pub width: f64,
    /// Displayed height in pixels.
    pub height: f64,
}

impl DisplayDimensions {
    /// Creates display dimensions from explicit sides.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either side is zero (or otherwise unusable).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let usable = |v: f64| v > 0.0;
        !usable(self.width) || !usable(self.height)
    }

    /// Returns the displayed image as a rectangle anchored at the origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Returns the dimensions as a kurbo [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Chooses the uniform scale that maps the natural image into `container`.
///
/// - Smaller than the container on both axes: the configured minimum
///   multiplier, so a tiny plan is not lost inside a large screen.
/// - Smaller on exactly one axis: grow until that axis is covered.
/// - Otherwise: natural size.
///
/// The per-room `zoom_after_scale` is applied on top of the chosen scale.
#[must_use]
pub fn resolve_display_scale(natural: ImageSize, container: Size, options: ScaleOptions) -> f64 {
    let narrower = natural.width < container.width;
    let shorter = natural.height < container.height;
    let base = match (narrower, shorter) {
        (true, true) => options.minimum_scale_multiplier,
        (true, false) | (false, true) => {
            (container.width / natural.width).max(container.height / natural.height)
        }
        (false, false) => 1.0,
    };
    base * options.zoom_after_scale
}

/// Resolves the displayed size of a floor-plan image inside `container`.
///
/// See [`resolve_display_scale`] for how the scale is chosen; each side is
/// floored to whole pixels.
#[must_use]
pub fn resolve_display_dimensions(
    natural: ImageSize,
    container: Size,
    options: ScaleOptions,
) -> DisplayDimensions {
    let scale = resolve_display_scale(natural, container, options);
    DisplayDimensions {
        width: (natural.width * scale).floor(),
        height: (natural.height * scale).floor(),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ImageSize, ScaleOptions, resolve_display_dimensions, resolve_display_scale};

    #[test]
    fn image_size_rejects_degenerate_sides() {
        assert!(ImageSize::new(0.0, 10.0).is_none());
        assert!(ImageSize::new(10.0, -1.0).is_none());
        assert!(ImageSize::new(f64::NAN, 10.0).is_none());
        assert!(ImageSize::new(10.0, 10.0).is_some());
    }

    #[test]
    fn small_image_uses_minimum_multiplier() {
        let natural = ImageSize::new(400.0, 300.0).unwrap();
        let options = ScaleOptions {
            minimum_scale_multiplier: 2.0,
            zoom_after_scale: 1.0,
        };
        let display = resolve_display_dimensions(natural, Size::new(1000.0, 800.0), options);
        assert_eq!((display.width, display.height), (800.0, 600.0));
    }

    #[test]
    fn one_short_axis_grows_to_cover() {
        // Wide but short: height must grow to 800.
        let natural = ImageSize::new(3000.0, 400.0).unwrap();
        let scale =
            resolve_display_scale(natural, Size::new(1000.0, 800.0), ScaleOptions::default());
        assert_eq!(scale, 2.0);
    }

    #[test]
    fn large_image_keeps_natural_size_then_zooms() {
        let natural = ImageSize::new(2001.0, 1201.0).unwrap();
        let options = ScaleOptions {
            minimum_scale_multiplier: 3.0,
            zoom_after_scale: 0.5,
        };
        let display = resolve_display_dimensions(natural, Size::new(1000.0, 800.0), options);
        // 2001 * 0.5 = 1000.5 and 1201 * 0.5 = 600.5, floored.
        assert_eq!((display.width, display.height), (1000.0, 600.0));
    }
}
