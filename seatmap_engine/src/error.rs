// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use seatmap_sectors::SectorId;
use thiserror::Error;

/// Requests the engine refuses.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// No room has been entered yet.
    #[error("no room has been entered")]
    NoRoom,
    /// The sector is not part of the current grid (or there is no grid yet).
    #[error("{0} is not part of the current sector grid")]
    UnknownSector(SectorId),
    /// The sector exists but holds no seats.
    #[error("{0} has no seats and cannot be selected")]
    SectorDisabled(SectorId),
}
