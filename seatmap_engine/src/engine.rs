// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use seatmap_config::{RoomConfig, RoomConfigLookup, RoomId};
use seatmap_layout::{
    DisplayDimensions, ImageSize, Seat, SeatBounds, SeatId, SeatScale, compute_seat_bounds,
    resolve_display_dimensions,
};
use seatmap_nav::{FocusController, NavCommand, NavDomain, NavOutcome, PanController};
use seatmap_sectors::minimap::{MinimapLayout, SectorMark};
use seatmap_sectors::{SectorGrid, SectorId};
use seatmap_visibility::{VisibilityParams, visible_seats};
use tracing::{debug, warn};

use crate::{EngineError, EngineListener, Generation, ImageLoadTicket, LoadOutcome};

/// Geometry derived from one recompute cycle.
///
/// Built in full before it replaces the previous layout, so readers never see
/// a display size from one cycle paired with a grid from another.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Rendered size of the floor-plan image.
    pub display: DisplayDimensions,
    /// Reference-to-display seat scale.
    pub scale: SeatScale,
    /// Navigable region.
    pub bounds: SeatBounds,
    /// Sector tiling of [`Layout::bounds`].
    pub grid: SectorGrid,
}

impl Layout {
    fn same_geometry(&self, other: &Self) -> bool {
        self.display == other.display && self.bounds == other.bounds && self.grid == other.grid
    }
}

/// Runs the seat map for one kiosk room view.
///
/// The engine owns the per-room inputs (configuration, seats, the image's
/// natural size, the container size), recomputes the derived layout whenever
/// one of them changes, and keeps pan, focus, and the visible seat list in
/// step with it. Changes are reported through an [`EngineListener`].
#[derive(Debug)]
pub struct SeatMapEngine<L: EngineListener = ()> {
    listener: L,
    room: Option<RoomId>,
    generation: Generation,
    config: RoomConfig,
    seats: Vec<Seat>,
    natural: Option<ImageSize>,
    container: Option<Size>,
    pending_resize: Option<Size>,
    layout: Option<Layout>,
    pan: PanController,
    focus: FocusController,
    visible: Vec<SeatId>,
    reported_count: Option<usize>,
    reported_visible: Option<Vec<SeatId>>,
}

impl Default for SeatMapEngine<()> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<L: EngineListener> SeatMapEngine<L> {
    /// Creates an engine with no room, reporting to `listener`.
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            room: None,
            generation: Generation::default(),
            config: RoomConfig::default(),
            seats: Vec::new(),
            natural: None,
            container: None,
            pending_resize: None,
            layout: None,
            pan: PanController::new(),
            focus: FocusController::new(),
            visible: Vec::new(),
            reported_count: None,
            reported_visible: None,
        }
    }

    /// The listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The listener, mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the engine, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Switches to `room`.
    ///
    /// Everything derived from the previous room is dropped: seats, the
    /// image size, the layout, the pan offset, and both focus cursors. The
    /// container size and the active region survive. The returned ticket must
    /// accompany the room image's size in [`SeatMapEngine::image_loaded`].
    ///
    /// A `config` that fails validation is replaced by the defaults.
    pub fn enter_room(&mut self, room: RoomId, config: RoomConfig) -> ImageLoadTicket {
        let sector_before = self.focused_sector();
        let seat_before = self.focused_seat();

        self.generation = self.generation.next();
        self.room = Some(room);
        self.config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(%room, error = %err, "invalid room configuration, using defaults");
                RoomConfig::default()
            }
        };
        self.seats.clear();
        self.natural = None;
        self.layout = None;
        self.pan.reset();
        self.focus.reset();
        self.visible.clear();
        debug!(%room, generation = %self.generation, "entered room");

        if sector_before.is_some() {
            self.listener.sector_focus_changed(None);
        }
        self.report_count();
        self.report_visible();
        if seat_before.is_some() {
            self.listener.seat_focus_changed(None);
        }
        ImageLoadTicket::new(room, self.generation)
    }

    /// Switches to `room` with settings from `lookup`.
    pub fn enter_room_with<C: RoomConfigLookup + ?Sized>(
        &mut self,
        lookup: &C,
        room: RoomId,
    ) -> ImageLoadTicket {
        self.enter_room(room, lookup.room_config(room))
    }

    /// Replaces the room's seats and recomputes.
    pub fn set_seats(&mut self, seats: Vec<Seat>) {
        debug!(count = seats.len(), "seats replaced");
        self.seats = seats;
        self.recompute();
    }

    /// Records the container's first measurement and recomputes.
    ///
    /// Any resize still waiting for a frame is superseded.
    pub fn mount_container(&mut self, size: Size) {
        self.pending_resize = None;
        self.container = Some(size);
        self.recompute();
    }

    /// Records the decoded size of the room image.
    ///
    /// Loads requested for an earlier room visit are discarded.
    pub fn image_loaded(&mut self, ticket: ImageLoadTicket, natural: ImageSize) -> LoadOutcome {
        if self.room != Some(ticket.room()) || self.generation != ticket.generation() {
            debug!(
                room = %ticket.room(),
                ticket = %ticket.generation(),
                current = %self.generation,
                "discarding stale image load"
            );
            return LoadOutcome::Discarded;
        }
        self.natural = Some(natural);
        self.recompute();
        LoadOutcome::Applied
    }

    /// Queues a container resize for the next [`SeatMapEngine::animation_frame`].
    ///
    /// Only the latest size queued before a frame is used.
    pub fn container_resized(&mut self, size: Size) {
        if let Some(previous) = self.pending_resize.replace(size) {
            debug!(?previous, ?size, "coalescing resize");
        }
    }

    /// Applies the queued resize, if any. Returns `true` if a recompute ran.
    pub fn animation_frame(&mut self) -> bool {
        let Some(size) = self.pending_resize.take() else {
            return false;
        };
        if self.container == Some(size) {
            return false;
        }
        self.container = Some(size);
        self.recompute();
        true
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Shows sector `id`, moving the minimap cursor to it.
    pub fn select_sector(&mut self, id: SectorId) -> Result<SectorId, EngineError> {
        if self.room.is_none() {
            return Err(EngineError::NoRoom);
        }
        let grid = self
            .layout
            .as_ref()
            .map(|layout| &layout.grid)
            .ok_or(EngineError::UnknownSector(id))?;
        let sector = grid.get(id).ok_or(EngineError::UnknownSector(id))?;
        if !sector.enabled {
            return Err(EngineError::SectorDisabled(id));
        }
        let index = grid.enabled_index_of(id);
        self.pan.select(sector);
        debug!(sector = %id, offset = ?self.pan.offset(), "sector selected");

        let before = self.focused_sector();
        self.focus.set_cursor(NavDomain::MinimapSector, index);
        if self.focused_sector() != before {
            self.listener.sector_focus_changed(self.focused_sector());
        }
        self.refresh_visible();
        Ok(id)
    }

    /// Sets the region that receives keypad commands.
    pub fn set_active_region(&mut self, domain: Option<NavDomain>) {
        self.focus.set_active_region(domain);
    }

    /// Handles a keypad command routed to `domain`.
    pub fn handle_command(&mut self, domain: NavDomain, command: NavCommand) -> NavOutcome {
        let len = match domain {
            NavDomain::MinimapSector => self.grid().map_or(0, SectorGrid::enabled_len),
            NavDomain::RoomSeat => self.visible.len(),
        };
        let sector_before = self.focused_sector();
        let seat_before = self.focused_seat();
        let outcome = self.focus.handle(domain, command, len);
        match outcome {
            NavOutcome::Ignored => {
                if self.focus.active_region() != Some(domain) {
                    warn!(
                        ?domain,
                        ?command,
                        active = ?self.focus.active_region(),
                        "command for inactive region"
                    );
                } else {
                    debug!(?domain, ?command, "nothing to act on");
                }
            }
            NavOutcome::SectorFocused(_) => {
                if self.focused_sector() != sector_before {
                    self.listener.sector_focus_changed(self.focused_sector());
                }
            }
            NavOutcome::SectorConfirmed(index) => {
                let Some(sector) = self.grid().and_then(|g| g.enabled_sector(index)).copied()
                else {
                    return NavOutcome::Ignored;
                };
                self.pan.select(&sector);
                debug!(sector = %sector.id, "sector confirmed");
                self.listener.sector_confirmed(sector.id);
                self.refresh_visible();
            }
            NavOutcome::SeatFocused(_) => {
                if self.focused_seat() != seat_before {
                    self.listener.seat_focus_changed(self.focused_seat());
                }
            }
            NavOutcome::SeatActivated(index) => {
                if let Some(&seat) = self.visible.get(index) {
                    debug!(%seat, "seat activated");
                    self.listener.seat_activated(seat);
                }
            }
        }
        outcome
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Current room.
    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    /// Current room generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Settings of the current room.
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Seats of the current room, in feed order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Looks up a seat of the current room.
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Current container size.
    pub fn container(&self) -> Option<Size> {
        self.container
    }

    /// Layout from the last recompute, if every input was available.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Rendered image size.
    pub fn display(&self) -> Option<DisplayDimensions> {
        self.layout.as_ref().map(|l| l.display)
    }

    /// Navigable region.
    pub fn bounds(&self) -> Option<SeatBounds> {
        self.layout.as_ref().map(|l| l.bounds)
    }

    /// Sector grid.
    pub fn grid(&self) -> Option<&SectorGrid> {
        self.layout.as_ref().map(|l| &l.grid)
    }

    /// Translation applied to the displayed image.
    pub fn pan_offset(&self) -> Vec2 {
        self.pan.offset()
    }

    /// Sector currently shown.
    pub fn selected_sector(&self) -> Option<SectorId> {
        self.pan.selected()
    }

    /// Ids of the visible seats, in focus order.
    pub fn visible_seat_ids(&self) -> &[SeatId] {
        &self.visible
    }

    /// The visible seats, in focus order.
    pub fn visible_seats(&self) -> Vec<&Seat> {
        self.visible.iter().filter_map(|&id| self.seat(id)).collect()
    }

    /// Region receiving keypad commands.
    pub fn active_region(&self) -> Option<NavDomain> {
        self.focus.active_region()
    }

    /// Sector under the minimap cursor.
    pub fn focused_sector(&self) -> Option<SectorId> {
        let index = self.focus.cursor(NavDomain::MinimapSector)?;
        Some(self.grid()?.enabled_sector(index)?.id)
    }

    /// Seat under the seat cursor.
    pub fn focused_seat(&self) -> Option<SeatId> {
        let index = self.focus.cursor(NavDomain::RoomSeat)?;
        self.visible.get(index).copied()
    }

    /// Minimap placement for the current room and display.
    pub fn minimap(&self) -> MinimapLayout {
        MinimapLayout::new(
            self.display(),
            self.config.minimap_scale_factor,
            self.config.minimap_origin(),
        )
    }

    /// Minimap draw list for every sector.
    pub fn minimap_marks(&self) -> Vec<SectorMark> {
        let Some(grid) = self.grid() else {
            return Vec::new();
        };
        self.minimap().sector_marks(
            grid,
            self.selected_sector(),
            self.focus.cursor(NavDomain::MinimapSector),
        )
    }

    // -------------------------------------------------------------------------
    // Recompute
    // -------------------------------------------------------------------------

    fn build_layout(&self) -> Option<Layout> {
        self.room?;
        let natural = self.natural?;
        let container = self.container?;
        let display = resolve_display_dimensions(natural, container, self.config.scale_options());
        if display.is_empty() {
            return None;
        }
        let scale = SeatScale::new(display, self.config.reference_size(natural))?;
        let bounds =
            compute_seat_bounds(&self.seats, display, scale, self.config.bounds_options())?;
        let grid = SectorGrid::tile(&bounds, container, &scale.seat_rects(&self.seats))?;
        Some(Layout {
            display,
            scale,
            bounds,
            grid,
        })
    }

    fn recompute(&mut self) {
        let next = self.build_layout();
        let geometry_changed = match (&self.layout, &next) {
            (Some(old), Some(new)) => !old.same_geometry(new),
            (None, None) => false,
            _ => true,
        };
        self.layout = next;

        if geometry_changed {
            let auto = self
                .pan
                .geometry_changed(self.layout.as_ref().map(|l| &l.grid));
            debug!(
                display = ?self.display(),
                sectors = self.grid().map_or(0, |g| g.all().len()),
                enabled = self.grid().map_or(0, SectorGrid::enabled_len),
                selected = ?auto,
                "layout recomputed"
            );
            // Cursor indices refer to the old grid.
            if self.focus.cursor(NavDomain::MinimapSector).is_some() {
                self.focus.set_cursor(NavDomain::MinimapSector, None);
                self.listener.sector_focus_changed(None);
            }
        }
        self.report_count();
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        let seat_before = self.focused_seat();
        self.visible = match &self.layout {
            Some(layout) => {
                let params = VisibilityParams::new(
                    self.container.unwrap_or(Size::ZERO),
                    self.pan.offset(),
                )
                .with_active_tile(
                    self.pan
                        .selected()
                        .and_then(|id| layout.grid.get(id))
                        .map(|s| s.tile),
                )
                .with_minimap(Some(self.minimap().screen_rect()))
                .with_threshold(self.config.seat_overlap_threshold);
                visible_seats(&self.seats, &layout.scale, &params)
                    .into_iter()
                    .map(|s| s.id)
                    .collect()
            }
            None => Vec::new(),
        };
        self.focus.clamp(NavDomain::RoomSeat, self.visible.len());
        self.report_visible();
        let seat_after = self.focused_seat();
        if seat_after != seat_before {
            self.listener.seat_focus_changed(seat_after);
        }
    }

    fn report_count(&mut self) {
        let count = self.grid().map_or(0, SectorGrid::enabled_len);
        if self.reported_count != Some(count) {
            self.reported_count = Some(count);
            self.listener.sector_count_changed(count);
        }
    }

    fn report_visible(&mut self) {
        if self.reported_visible.as_deref() != Some(self.visible.as_slice()) {
            self.reported_visible = Some(self.visible.clone());
            self.listener.visible_seats_changed(&self.visible);
        }
    }
}
