//! Whitespace-separated slot listing.
//!
//! One line per slot: `<key> <x1> <y2> <x2> <y1> 0`. The bottom edge is
//! written before the top edge and every line ends in a literal `0`; the
//! consumers of this format read the fields positionally. Coordinates are
//! the raw geometric edges (no inclusive-pixel adjustment), truncated toward
//! zero.

use std::fmt::Write as _;

use crate::{
    foundation::error::CardslotsResult,
    layout::table::{Slot, SlotTable},
};

pub fn render_plain(table: &SlotTable) -> CardslotsResult<String> {
    let mut out = String::with_capacity(table.len() * 24);
    for slot in table.iter() {
        writeln!(out, "{}", plain_line(slot))?;
    }
    Ok(out)
}

pub fn plain_line(slot: &Slot) -> String {
    let r = slot.rect;
    format!(
        "{} {} {} {} {} 0",
        slot.key,
        trunc(r.x0),
        trunc(r.y1),
        trunc(r.x1),
        trunc(r.y0)
    )
}

fn trunc(v: f64) -> i64 {
    v.trunc() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/emit/plain.rs"]
mod tests;
