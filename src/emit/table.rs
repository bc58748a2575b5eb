//! JavaScript object literal of inclusive pixel boxes, ready to paste into
//! the screenshot slicer.

use std::fmt::Write as _;

use crate::{
    foundation::core::Side,
    foundation::error::{CardslotsError, CardslotsResult},
    layout::table::{Slot, SlotTable, is_identifier},
};

/// Render `table` as `var <name> = { ... };`, one keyed entry per slot.
///
/// Sides are written in `Side::ALL` order with a blank line between them.
/// Each entry carries a trailing comment with the box's pixel size.
pub fn render_table(table: &SlotTable, name: &str) -> CardslotsResult<String> {
    if !is_identifier(name) {
        return Err(CardslotsError::format(format!(
            "table name '{name}' is not a valid identifier"
        )));
    }

    let mut out = String::with_capacity(table.len() * 48 + 128);
    writeln!(out, "// Card slot bounding boxes (inclusive pixel coordinates).")?;
    writeln!(out, "// Screen: {}", table.screen)?;
    writeln!(out, "var {name} = {{")?;
    for (group, side) in Side::ALL.into_iter().enumerate() {
        if group > 0 {
            writeln!(out)?;
        }
        for slot in table.side(side) {
            writeln!(out, "{}", table_entry(slot))?;
        }
    }
    writeln!(out, "}};")?;
    Ok(out)
}

pub fn table_entry(slot: &Slot) -> String {
    let b = slot.pixel_box();
    format!(
        "  {:<5}[{:4}, {:4}, {:4}, {:4}],  // {} x {}",
        format!("{}:", slot.key),
        b.x1,
        b.y1,
        b.x2,
        b.y2,
        b.width(),
        b.height()
    )
}

#[cfg(test)]
#[path = "../../tests/unit/emit/table.rs"]
mod tests;
