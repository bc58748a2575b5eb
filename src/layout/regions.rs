use crate::{
    foundation::core::{Axis, PixelBox, Side},
    layout::table::Slot,
};

/// Card-local boxes of the rank and suit glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CardRegions {
    pub rank: PixelBox,
    pub suit: PixelBox,
}

/// Upright cards (north/south rows): rank glyph above the suit glyph.
pub const UPRIGHT_REGIONS: CardRegions = CardRegions {
    rank: PixelBox::new(0, 0, 51, 59),
    suit: PixelBox::new(0, 60, 51, 120),
};

/// Sideways cards (east/west columns): rank glyph left of the suit glyph.
pub const SIDEWAYS_REGIONS: CardRegions = CardRegions {
    rank: PixelBox::new(0, 0, 41, 50),
    suit: PixelBox::new(42, 0, 73, 50),
};

pub fn regions_for(side: Side) -> CardRegions {
    match side.axis() {
        Axis::Horizontal => UPRIGHT_REGIONS,
        Axis::Vertical => SIDEWAYS_REGIONS,
    }
}

/// Screen-space rank and suit boxes of one slot.
pub fn slot_regions(slot: &Slot) -> CardRegions {
    let card = slot.pixel_box();
    let local = regions_for(slot.side());
    CardRegions {
        rank: card.sub_box(local.rank),
        suit: card.sub_box(local.suit),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/regions.rs"]
mod tests;
