// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Nav: small state machines for moving around a tiled seat map.
//!
//! - [`pan`]: the selected sector and the pan offset that shows it.
//! - [`focus`]: keypad focus cursors for the minimap and the room view.
//!
//! Both are plain state holders. They take the current sector grid or list
//! length as input and report what changed, leaving rendering and
//! notification to the host.
//!
//! This crate is `no_std`.

#![no_std]

pub mod focus;
pub mod pan;

pub use focus::{FocusController, FocusState, NavCommand, NavDomain, NavOutcome};
pub use pan::PanController;
