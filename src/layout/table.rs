use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{PixelBox, Rect, Screen, Side, SlotKey},
    foundation::error::{CardslotsError, CardslotsResult},
    layout::partition::{CARDS_PER_SIDE, partition, validate_split},
};

const MAX_SCREEN_EXTENT: u32 = i32::MAX as u32;

/// Outer rectangle of each side's card row.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SideBoxes {
    pub north: Rect,
    pub south: Rect,
    pub east: Rect,
    pub west: Rect,
}

impl SideBoxes {
    pub fn get(&self, side: Side) -> Rect {
        match side {
            Side::North => self.north,
            Side::South => self.south,
            Side::East => self.east,
            Side::West => self.west,
        }
    }
}

/// A named set of table constants for one screen geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    /// Short identifier, e.g. `ibb6`.
    pub name: String,
    /// Variable name used by the table emitter.
    pub table_name: String,
    pub screen: Screen,
    pub boxes: SideBoxes,
}

impl Layout {
    /// First-generation constants; the plain emitter's native layout.
    pub fn draft() -> Self {
        Self {
            name: "draft".to_string(),
            table_name: "ibbBoxes".to_string(),
            screen: Screen::new(750, 1334),
            boxes: SideBoxes {
                north: Rect::new(0.0, 120.0, 732.0, 244.0),
                south: Rect::new(0.0, 1208.0, 732.0, 1332.0),
                east: Rect::new(668.0, 338.0, 748.0, 1036.0),
                west: Rect::new(2.0, 338.0, 80.0, 1036.0),
            },
        }
    }

    /// Constants matched to iPhone 6 screenshots; the table emitter's native layout.
    pub fn ibb6() -> Self {
        Self {
            name: "ibb6".to_string(),
            table_name: "ibbBoxes6".to_string(),
            screen: Screen::new(750, 1334),
            boxes: SideBoxes {
                north: Rect::new(0.0, 120.0, 746.0, 245.0),
                south: Rect::new(0.0, 1208.0, 746.0, 1333.0),
                east: Rect::new(668.0, 336.0, 746.0, 1038.0),
                west: Rect::new(2.0, 336.0, 80.0, 1038.0),
            },
        }
    }

    /// Parse a layout from JSON and validate it.
    pub fn from_json_str(s: &str) -> CardslotsResult<Self> {
        let layout: Self = serde_json::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a layout JSON file.
    pub fn from_path(path: &Path) -> CardslotsResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read layout '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> CardslotsResult<()> {
        if self.name.trim().is_empty() {
            return Err(CardslotsError::validation("layout name must be non-empty"));
        }
        if !is_identifier(&self.table_name) {
            return Err(CardslotsError::validation(format!(
                "layout table_name '{}' must be an identifier",
                self.table_name
            )));
        }
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(CardslotsError::validation(
                "screen width/height must be > 0",
            ));
        }
        // Pixel boxes are i32; every box lies inside the screen.
        if self.screen.width > MAX_SCREEN_EXTENT || self.screen.height > MAX_SCREEN_EXTENT {
            return Err(CardslotsError::validation(format!(
                "screen {} exceeds {MAX_SCREEN_EXTENT} px on a side",
                self.screen
            )));
        }
        for side in Side::ALL {
            let outer = self.boxes.get(side);
            if let Err(err) = validate_split(outer, side.axis(), CARDS_PER_SIDE) {
                let msg = match err {
                    CardslotsError::Validation(msg) => msg,
                    other => other.to_string(),
                };
                return Err(CardslotsError::validation(format!(
                    "layout '{}' side {side}: {msg}",
                    self.name
                )));
            }
            if !self.screen.contains_rect(outer) {
                return Err(CardslotsError::validation(format!(
                    "layout '{}' side {side} box {:?} lies outside the {} screen",
                    self.name, outer, self.screen
                )));
            }
        }
        Ok(())
    }

    /// Validate and subdivide every side into card slots, in `Side::ALL` order.
    #[tracing::instrument(skip(self), fields(layout = %self.name))]
    pub fn slots(&self) -> CardslotsResult<SlotTable> {
        self.validate()?;

        let mut slots = Vec::with_capacity(Side::ALL.len() * CARDS_PER_SIDE);
        for side in Side::ALL {
            let outer = self.boxes.get(side);
            let rects = partition(outer, side.axis(), CARDS_PER_SIDE)?;
            tracing::debug!(%side, ?outer, axis = ?side.axis(), "partitioned side");
            slots.extend(
                rects
                    .into_iter()
                    .enumerate()
                    .map(|(index, rect)| Slot::new(SlotKey::new(side, index), rect)),
            );
        }

        Ok(SlotTable {
            layout: self.name.clone(),
            table_name: self.table_name.clone(),
            screen: self.screen,
            per_side: CARDS_PER_SIDE,
            slots,
        })
    }
}

pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// One card position: its lookup key and geometric rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Slot {
    pub key: SlotKey,
    pub rect: Rect,
}

impl Slot {
    pub fn new(key: SlotKey, rect: Rect) -> Self {
        Self { key, rect }
    }

    pub fn side(&self) -> Side {
        self.key.side
    }

    pub fn index(&self) -> usize {
        self.key.index
    }

    /// Inclusive pixel box covered by this slot.
    pub fn pixel_box(&self) -> PixelBox {
        PixelBox::from_rect(self.rect)
    }

    /// Card rank shown in this slot: 14 (ace) at index 0 down to 2 at index 12.
    pub fn rank(&self) -> Option<u8> {
        (self.key.index < CARDS_PER_SIDE).then(|| (14 - self.key.index) as u8)
    }
}

/// Every slot of a layout, grouped by side in `Side::ALL` order.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotTable {
    pub layout: String,
    pub table_name: String,
    pub screen: Screen,
    per_side: usize,
    slots: Vec<Slot>,
}

impl SlotTable {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn side(&self, side: Side) -> &[Slot] {
        let start = side.ordinal() * self.per_side;
        &self.slots[start..start + self.per_side]
    }

    pub fn get(&self, key: SlotKey) -> Option<&Slot> {
        if key.index >= self.per_side {
            return None;
        }
        self.slots.get(key.side.ordinal() * self.per_side + key.index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/table.rs"]
mod tests;
