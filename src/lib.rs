//! Cardslots computes the pixel bounding boxes of the 13 card positions along
//! each side of an iBridgeBaron hand screenshot.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: a [`Layout`] names one outer rectangle per [`Side`] for a given [`Screen`].
//! 2. **Partition**: [`Layout::slots`] splits each side into 13 equal [`Slot`]s, along x for
//!    north/south and along y for east/west, producing a [`SlotTable`].
//! 3. **Emit**: pure formatters render a [`SlotTable`] as text:
//!    - [`render_plain`]: raw geometric edges, one whitespace-separated line per slot
//!    - [`render_table`]: a JavaScript object literal of inclusive [`PixelBox`]es
//!    - [`render_json`]: the same boxes as JSON
//!    - [`render_regions`]: rank and suit glyph boxes inside each card
//!
//! Output is deterministic: the same layout always renders to the same bytes.
#![forbid(unsafe_code)]

mod emit;
mod foundation;
mod layout;

pub use emit::json::render_json;
pub use emit::plain::{plain_line, render_plain};
pub use emit::regions::render_regions;
pub use emit::table::{render_table, table_entry};
pub use foundation::core::{Axis, PixelBox, Point, Rect, Screen, Side, SlotKey};
pub use foundation::error::{CardslotsError, CardslotsResult};
pub use layout::partition::{CARDS_PER_SIDE, partition, validate_outer, validate_split};
pub use layout::regions::{
    CardRegions, SIDEWAYS_REGIONS, UPRIGHT_REGIONS, regions_for, slot_regions,
};
pub use layout::table::{Layout, SideBoxes, Slot, SlotTable};
