use std::fmt::Write as _;

use crate::{
    foundation::error::CardslotsResult,
    layout::{regions::slot_regions, table::SlotTable},
};

/// One line per slot: `<key> <rank> <rank box> <suit box>`, boxes as four
/// inclusive screen coordinates each.
pub fn render_regions(table: &SlotTable) -> CardslotsResult<String> {
    let mut out = String::with_capacity(table.len() * 48);
    for slot in table.iter() {
        let r = slot_regions(slot);
        let rank = slot.rank().map_or(0, u32::from);
        writeln!(
            out,
            "{} {} {} {} {} {} {} {} {} {}",
            slot.key,
            rank,
            r.rank.x1,
            r.rank.y1,
            r.rank.x2,
            r.rank.y2,
            r.suit.x1,
            r.suit.y1,
            r.suit.x2,
            r.suit.y2
        )?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/regions.rs"]
mod tests;
