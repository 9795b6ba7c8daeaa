// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Config: per-room display settings.
//!
//! Rooms differ in how their floor plans were drawn and digitized: some need
//! extra zoom, some have seats recorded against an older image size, some
//! need a wider margin around the seats. [`RoomConfig`] gathers those knobs,
//! [`RoomConfigTable`] loads a default plus per-room overrides from TOML, and
//! [`RoomConfigLookup`] lets a host supply settings from anywhere else.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_config::{RoomConfigLookup, RoomConfigTable, RoomId};
//!
//! let table = RoomConfigTable::from_toml_str(
//!     r#"
//!     [default]
//!     seat_bounds_margin = 30
//!
//!     [[room]]
//!     id = 2
//!     use_legacy_reference_size = true
//!     legacy_reference_width = 1920
//!     legacy_reference_height = 1080
//!     "#,
//! )
//! .unwrap();
//!
//! let room = table.room_config(RoomId(2));
//! assert!(room.use_legacy_reference_size);
//! assert_eq!(room.seat_bounds_margin, 30.0);
//! assert_eq!(table.room_config(RoomId(3)).seat_bounds_margin, 30.0);
//! ```

mod error;
mod room;
mod table;

pub use error::ConfigError;
pub use room::{RoomConfig, RoomId};
pub use table::{RoomConfigLookup, RoomConfigTable};
