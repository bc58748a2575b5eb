use std::{fmt, str::FromStr};

use crate::foundation::error::{CardslotsError, CardslotsResult};

pub use kurbo::{Point, Rect};

/// One of the four table edges a player's card row is drawn along.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Side {
    /// Top row.
    #[serde(rename = "N")]
    North,
    /// Bottom row.
    #[serde(rename = "S")]
    South,
    /// Right column.
    #[serde(rename = "E")]
    East,
    /// Left column.
    #[serde(rename = "W")]
    West,
}

impl Side {
    /// Output order for every emitter.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Single-letter tag used in slot keys.
    pub fn letter(self) -> char {
        match self {
            Side::North => 'N',
            Side::South => 'S',
            Side::East => 'E',
            Side::West => 'W',
        }
    }

    /// Inverse of [`Side::letter`].
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'N' => Some(Side::North),
            'S' => Some(Side::South),
            'E' => Some(Side::East),
            'W' => Some(Side::West),
            _ => None,
        }
    }

    /// Axis along which this side's card row is laid out.
    pub fn axis(self) -> Axis {
        match self {
            Side::North | Side::South => Axis::Horizontal,
            Side::East | Side::West => Axis::Vertical,
        }
    }

    /// Position in [`Side::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => 1,
            Side::East => 2,
            Side::West => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Subdivision axis of an outer rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Split along x; every slot keeps the full outer height.
    Horizontal,
    /// Split along y; every slot keeps the full outer width.
    Vertical,
}

/// Target screen resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Screen {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `rect` lies within `[0, width] x [0, height]`.
    pub fn contains_rect(self, rect: Rect) -> bool {
        rect.x0 >= 0.0
            && rect.y0 >= 0.0
            && rect.x1 <= f64::from(self.width)
            && rect.y1 <= f64::from(self.height)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Integer bounding box with both corners inclusive.
///
/// A box with `x1 == x2` is one pixel wide. This is the convention image
/// slicing code downstream expects: a crop of `[x1, y1, x2, y2]` is
/// `width() x height()` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelBox {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Round a geometric rectangle to the pixels it covers.
    ///
    /// The far corner is pulled in by one pixel before rounding, so a slot
    /// spanning `[0, 57)` maps to columns `0..=56`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x1: round_px(rect.x0),
            y1: round_px(rect.y0),
            x2: round_px(rect.x1 - 1.0),
            y2: round_px(rect.y1 - 1.0),
        }
    }

    pub fn width(self) -> i32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(self) -> i32 {
        self.y2 - self.y1 + 1
    }

    pub fn to_array(self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Map a box given relative to this box's top-left pixel into the same
    /// coordinate space as `self`, clipped to `self`.
    ///
    /// Inverted corners on either box are swapped first, so the result is
    /// always a well-formed box inside `self`.
    pub fn sub_box(self, local: PixelBox) -> PixelBox {
        let card = self.normalized();
        let local = local.normalized();
        PixelBox {
            x1: card.x1.saturating_add(local.x1).clamp(card.x1, card.x2),
            y1: card.y1.saturating_add(local.y1).clamp(card.y1, card.y2),
            x2: card.x1.saturating_add(local.x2).clamp(card.x1, card.x2),
            y2: card.y1.saturating_add(local.y2).clamp(card.y1, card.y2),
        }
    }

    /// Same pixels with `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(self) -> PixelBox {
        PixelBox {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }
}

fn round_px(v: f64) -> i32 {
    v.round() as i32
}

/// Lookup key of a card slot, e.g. `N3` or `E12`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SlotKey {
    pub side: Side,
    pub index: usize,
}

impl SlotKey {
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.letter(), self.index)
    }
}

impl FromStr for SlotKey {
    type Err = CardslotsError;

    fn from_str(s: &str) -> CardslotsResult<Self> {
        let mut chars = s.chars();
        let side = chars
            .next()
            .and_then(Side::from_letter)
            .ok_or_else(|| CardslotsError::validation(format!("slot key '{s}' has no side")))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CardslotsError::validation(format!(
                "slot key '{s}' must end in a decimal index"
            )));
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(CardslotsError::validation(format!(
                "slot key '{s}' index must not have a leading zero"
            )));
        }
        let index = digits
            .parse::<usize>()
            .map_err(|e| CardslotsError::validation(format!("slot key '{s}': {e}")))?;
        Ok(Self { side, index })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
