use serde::ser::{Serialize, Serializer};

use crate::{
    foundation::core::Screen,
    foundation::error::CardslotsResult,
    layout::table::SlotTable,
};

#[derive(serde::Serialize)]
struct BoxTableJson<'a> {
    layout: &'a str,
    screen: Screen,
    boxes: KeyedBoxes<'a>,
}

/// Serializes as a map in slot order; a `BTreeMap` would sort `N10` before `N2`.
struct KeyedBoxes<'a>(&'a SlotTable);

impl Serialize for KeyedBoxes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|slot| (slot.key.to_string(), slot.pixel_box().to_array())),
        )
    }
}

/// Pretty-printed JSON object of inclusive pixel boxes keyed by slot.
pub fn render_json(table: &SlotTable) -> CardslotsResult<String> {
    let doc = BoxTableJson {
        layout: &table.layout,
        screen: table.screen,
        boxes: KeyedBoxes(table),
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/json.rs"]
mod tests;
