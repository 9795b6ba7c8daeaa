// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use kurbo::Rect;

/// Identifier of a seat as assigned by the seat data feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SeatId(pub u32);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// A bookable seat placed on a floor-plan image.
///
/// Position and size are expressed in the room's reference space (see
/// [`SeatScale`](crate::SeatScale)). Seats are owned by the data feed and
/// treated as read-only by the Seatmap crates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Seat {
    /// Seat identifier.
    pub id: SeatId,
    /// Left edge in reference space.
    pub x: f64,
    /// Top edge in reference space.
    pub y: f64,
    /// Width in reference space.
    pub w: f64,
    /// Height in reference space.
    pub h: f64,
    /// Status code reported by the booking backend.
    pub status: u8,
    /// Icon code selecting how the seat is drawn.
    pub icon_type: u8,
    /// Display name (`VNAME`), for example `"A12"`.
    pub name: String,
    /// Number of active uses; `0` when nobody holds the seat.
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_count: u32,
}

/// Booking state derived from a seat's status code and use count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatState {
    /// Free and bookable.
    Available,
    /// In use or otherwise not bookable right now.
    Occupied,
    /// Reserved for visitors with accessibility needs.
    Restricted,
}

/// How a seat is drawn, derived from its icon code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatIcon {
    /// One of the rotated seat icons; `variant` is in `1..=6`.
    Rotated {
        /// Icon variant number.
        variant: u8,
    },
    /// A plain rectangular seat button.
    Button,
}

impl Seat {
    /// Status codes that mean "open for booking".
    pub const BOOKABLE_STATUSES: [u8; 2] = [1, 2];
    /// Status code of accessibility-reserved seats.
    pub const RESTRICTED_STATUS: u8 = 9;

    /// Creates a free seat drawn as a plain button.
    pub fn new(id: SeatId, name: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id,
            x,
            y,
            w,
            h,
            status: 1,
            icon_type: 1,
            name: name.into(),
            use_count: 0,
        }
    }

    /// Returns the seat rectangle in reference space.
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h).abs()
    }

    /// Returns the booking state of the seat.
    #[must_use]
    pub fn state(&self) -> SeatState {
        if self.status == Self::RESTRICTED_STATUS {
            SeatState::Restricted
        } else if self.use_count == 0 && Self::BOOKABLE_STATUSES.contains(&self.status) {
            SeatState::Available
        } else {
            SeatState::Occupied
        }
    }

    /// Returns how the seat is drawn, or `None` for icon codes with no
    /// on-map representation.
    #[must_use]
    pub fn icon(&self) -> Option<SeatIcon> {
        match self.icon_type {
            2..=7 => Some(SeatIcon::Rotated {
                variant: self.icon_type - 1,
            }),
            1 | 8 => Some(SeatIcon::Button),
            _ => None,
        }
    }
}
