use super::*;
use crate::{Layout, Rect, SlotKey};

#[test]
fn orientation_follows_the_side_axis() {
    assert_eq!(regions_for(Side::North), UPRIGHT_REGIONS);
    assert_eq!(regions_for(Side::South), UPRIGHT_REGIONS);
    assert_eq!(regions_for(Side::East), SIDEWAYS_REGIONS);
    assert_eq!(regions_for(Side::West), SIDEWAYS_REGIONS);
}

#[test]
fn glyph_boxes_fit_inside_every_ibb6_card() {
    let table = Layout::ibb6().slots().unwrap();
    for slot in table.iter() {
        let card = slot.pixel_box();
        let local = regions_for(slot.side());
        for glyph in [local.rank, local.suit] {
            assert!(glyph.x2 < card.width(), "{} {:?}", slot.key, glyph);
            assert!(glyph.y2 < card.height(), "{} {:?}", slot.key, glyph);
        }
    }
}

#[test]
fn slot_regions_are_translated_to_screen_space() {
    let table = Layout::ibb6().slots().unwrap();
    let slot = table.get(SlotKey::new(Side::East, 12)).unwrap();
    let r = slot_regions(slot);
    assert_eq!(r.rank, PixelBox::new(668, 984, 709, 1034));
    assert_eq!(r.suit, PixelBox::new(710, 984, 741, 1034));

    let slot = table.get(SlotKey::new(Side::South, 0)).unwrap();
    let r = slot_regions(slot);
    assert_eq!(r.rank, PixelBox::new(0, 1208, 51, 1267));
    assert_eq!(r.suit, PixelBox::new(0, 1268, 51, 1328));
}

#[test]
fn every_valid_layout_yields_regions_inside_its_cards() {
    let mut layout = Layout::ibb6();
    layout.boxes.north = Rect::new(0.0, 120.0, 13.0, 245.0);
    let table = layout.slots().unwrap();
    for slot in table.iter() {
        let card = slot.pixel_box();
        let r = slot_regions(slot);
        for glyph in [r.rank, r.suit] {
            assert!(card.x1 <= glyph.x1 && glyph.x1 <= glyph.x2 && glyph.x2 <= card.x2);
            assert!(card.y1 <= glyph.y1 && glyph.y1 <= glyph.y2 && glyph.y2 <= card.y2);
        }
    }
}
