// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

use crate::RoomId;

/// Errors produced while loading or validating room configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The overlap threshold is not a fraction.
    #[error("seat_overlap_threshold must be within 0..=1, got {0}")]
    ThresholdOutOfRange(f64),

    /// A multiplier or scale factor is zero, negative, or not finite.
    #[error("{field} must be finite and greater than zero, got {value}")]
    NonPositive {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A margin or offset is negative or not finite.
    #[error("{field} must be finite and not negative, got {value}")]
    Negative {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Legacy reference mode is on but no usable reference size is set.
    #[error("use_legacy_reference_size requires a positive legacy_reference_width and legacy_reference_height, got {width}x{height}")]
    MissingLegacyReference {
        /// Configured legacy width.
        width: f64,
        /// Configured legacy height.
        height: f64,
    },

    /// A `[[room]]` entry has no `id`.
    #[error("room entry #{0} has no id")]
    MissingRoomId(usize),

    /// Two `[[room]]` entries share an id.
    #[error("{0} is configured more than once")]
    DuplicateRoom(RoomId),

    /// A room's settings failed validation.
    #[error("invalid settings for {room}")]
    InvalidRoom {
        /// The room whose settings were rejected.
        room: RoomId,
        /// What was wrong with them.
        #[source]
        source: Box<ConfigError>,
    },

    /// The document is not valid TOML or does not match the expected shape.
    #[error("failed to parse room configuration")]
    Parse(#[from] toml::de::Error),

    /// The table could not be written out as TOML.
    #[error("failed to serialize room configuration")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
