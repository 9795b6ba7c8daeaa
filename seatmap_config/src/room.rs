// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use kurbo::{Point, Size};
use seatmap_layout::{BoundsOptions, ImageSize, ScaleOptions};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Identifier of a room (one floor-plan image with its seats).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.0)
    }
}

/// Display settings of one room.
///
/// Every field has a default, so a TOML table only needs the settings that
/// differ.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoomConfig {
    /// Limit navigation to the region around the seats instead of the whole
    /// image.
    pub use_seat_bounds: bool,
    /// Margin added around the seats, in display pixels.
    pub seat_bounds_margin: f64,
    /// Share of a seat that may fall outside the selected sector, or under
    /// the minimap, before it is hidden.
    pub seat_overlap_threshold: f64,
    /// Scale used when the image is smaller than the container on both axes.
    pub minimum_scale_multiplier: f64,
    /// Zoom applied after the base scale.
    pub zoom_after_scale: f64,
    /// Seats were digitized against a fixed reference size rather than the
    /// image's natural size.
    pub use_legacy_reference_size: bool,
    /// Reference width used in legacy mode.
    pub legacy_reference_width: f64,
    /// Reference height used in legacy mode.
    pub legacy_reference_height: f64,
    /// Minimap size relative to the displayed image.
    pub minimap_scale_factor: f64,
    /// Minimap distance from the top of the room view.
    pub minimap_position_top: f64,
    /// Minimap distance from the left of the room view.
    pub minimap_position_left: f64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            use_seat_bounds: true,
            seat_bounds_margin: 20.0,
            seat_overlap_threshold: 0.1,
            minimum_scale_multiplier: 1.5,
            zoom_after_scale: 1.0,
            use_legacy_reference_size: false,
            legacy_reference_width: 0.0,
            legacy_reference_height: 0.0,
            minimap_scale_factor: 0.1,
            minimap_position_top: 8.0,
            minimap_position_left: 8.0,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl RoomConfig {
    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.seat_overlap_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(
                self.seat_overlap_threshold,
            ));
        }
        positive("minimum_scale_multiplier", self.minimum_scale_multiplier)?;
        positive("zoom_after_scale", self.zoom_after_scale)?;
        positive("minimap_scale_factor", self.minimap_scale_factor)?;
        non_negative("seat_bounds_margin", self.seat_bounds_margin)?;
        non_negative("minimap_position_top", self.minimap_position_top)?;
        non_negative("minimap_position_left", self.minimap_position_left)?;
        if self.use_legacy_reference_size && self.legacy_reference().is_none() {
            return Err(ConfigError::MissingLegacyReference {
                width: self.legacy_reference_width,
                height: self.legacy_reference_height,
            });
        }
        Ok(())
    }

    /// Options for display sizing.
    #[must_use]
    pub fn scale_options(&self) -> ScaleOptions {
        ScaleOptions {
            minimum_scale_multiplier: self.minimum_scale_multiplier,
            zoom_after_scale: self.zoom_after_scale,
        }
    }

    /// Options for seat bounds.
    #[must_use]
    pub fn bounds_options(&self) -> BoundsOptions {
        BoundsOptions {
            use_seat_bounds: self.use_seat_bounds,
            margin: self.seat_bounds_margin,
        }
    }

    /// The legacy reference size, if both sides are usable.
    #[must_use]
    pub fn legacy_reference(&self) -> Option<ImageSize> {
        ImageSize::new(self.legacy_reference_width, self.legacy_reference_height)
    }

    /// Size of the space seat coordinates are expressed in: the legacy
    /// reference in legacy mode, the image's natural size otherwise.
    #[must_use]
    pub fn reference_size(&self, natural: ImageSize) -> Size {
        match self.legacy_reference() {
            Some(legacy) if self.use_legacy_reference_size => legacy.size(),
            _ => natural.size(),
        }
    }

    /// Top-left corner of the minimap in room-view coordinates.
    #[must_use]
    pub fn minimap_origin(&self) -> Point {
        Point::new(self.minimap_position_left, self.minimap_position_top)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use seatmap_layout::ImageSize;

    use super::{RoomConfig, RoomId};
    use crate::ConfigError;

    #[test]
    fn defaults_validate() {
        let config = RoomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.minimap_origin(), Point::new(8.0, 8.0));
        assert_eq!(config.bounds_options().margin, 20.0);
        assert_eq!(config.scale_options().minimum_scale_multiplier, 1.5);
    }

    #[test]
    fn threshold_must_be_a_fraction() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let config = RoomConfig {
                seat_overlap_threshold: bad,
                ..RoomConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ThresholdOutOfRange(_))
            ));
        }
    }

    #[test]
    fn zero_zoom_is_rejected() {
        let config = RoomConfig {
            zoom_after_scale: 0.0,
            ..RoomConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "zoom_after_scale",
                ..
            })
        ));
    }

    #[test]
    fn legacy_mode_needs_a_reference() {
        let mut config = RoomConfig {
            use_legacy_reference_size: true,
            ..RoomConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingLegacyReference { .. })
        ));

        config.legacy_reference_width = 1000.0;
        config.legacy_reference_height = 500.0;
        assert!(config.validate().is_ok());
        let natural = ImageSize::new(2000.0, 1000.0).unwrap();
        assert_eq!(config.reference_size(natural), Size::new(1000.0, 500.0));

        config.use_legacy_reference_size = false;
        assert_eq!(config.reference_size(natural), Size::new(2000.0, 1000.0));
    }

    #[test]
    fn room_id_display() {
        assert_eq!(RoomId(12).to_string(), "room 12");
    }
}
