use super::*;

#[test]
fn presets_validate() {
    Layout::draft().validate().unwrap();
    Layout::ibb6().validate().unwrap();
}

#[test]
fn slots_come_out_grouped_in_side_order() {
    let table = Layout::draft().slots().unwrap();
    assert_eq!(table.len(), 52);

    let keys: Vec<String> = table.iter().map(|s| s.key.to_string()).collect();
    assert_eq!(keys[0], "N0");
    assert_eq!(keys[12], "N12");
    assert_eq!(keys[13], "S0");
    assert_eq!(keys[26], "E0");
    assert_eq!(keys[51], "W12");

    for side in Side::ALL {
        let row = table.side(side);
        assert_eq!(row.len(), CARDS_PER_SIDE);
        for (i, slot) in row.iter().enumerate() {
            assert_eq!(slot.side(), side);
            assert_eq!(slot.index(), i);
        }
    }
}

#[test]
fn lookup_by_key_matches_iteration() {
    let table = Layout::ibb6().slots().unwrap();
    let key: SlotKey = "E12".parse().unwrap();
    let slot = table.get(key).unwrap();
    assert_eq!(slot.key, key);
    assert_eq!(slot.pixel_box(), PixelBox::new(668, 984, 745, 1037));
    assert!(table.get(SlotKey::new(Side::East, 13)).is_none());
}

#[test]
fn ibb6_south_zero_is_a_57_by_125_crop() {
    let table = Layout::ibb6().slots().unwrap();
    let b = table.get(SlotKey::new(Side::South, 0)).unwrap().pixel_box();
    assert_eq!(b, PixelBox::new(0, 1208, 56, 1332));
    assert_eq!((b.width(), b.height()), (57, 125));
}

#[test]
fn ranks_run_from_ace_to_deuce() {
    let table = Layout::ibb6().slots().unwrap();
    let north = table.side(Side::North);
    assert_eq!(north[0].rank(), Some(14));
    assert_eq!(north[12].rank(), Some(2));
    let stray = Slot::new(SlotKey::new(Side::North, 13), Rect::ZERO);
    assert_eq!(stray.rank(), None);
}

#[test]
fn validation_rejects_bad_layouts() {
    let mut layout = Layout::ibb6();
    layout.boxes.west = Rect::new(80.0, 336.0, 2.0, 1038.0);
    let err = layout.validate().unwrap_err().to_string();
    assert!(err.contains("side W"), "{err}");
    assert!(layout.slots().is_err());

    let mut layout = Layout::ibb6();
    layout.boxes.south = Rect::new(0.0, 1208.0, 746.0, 1400.0);
    assert!(layout.validate().unwrap_err().to_string().contains("outside"));

    let mut layout = Layout::ibb6();
    layout.screen = Screen::new(0, 1334);
    assert!(layout.validate().is_err());

    let mut layout = Layout::ibb6();
    layout.table_name = "ibb boxes".to_string();
    assert!(layout.validate().is_err());

    let mut layout = Layout::ibb6();
    layout.name = " ".to_string();
    assert!(layout.validate().is_err());
}

#[test]
fn json_layout_roundtrips_through_validation() {
    let json = serde_json::to_string(&Layout::ibb6()).unwrap();
    assert_eq!(Layout::from_json_str(&json).unwrap(), Layout::ibb6());

    let bad = json.replace("\"x1\":746.0", "\"x1\":-746.0");
    assert!(Layout::from_json_str(&bad).is_err());

    assert!(matches!(
        Layout::from_json_str("{}"),
        Err(CardslotsError::Serde(_))
    ));
}

#[test]
fn missing_layout_file_reports_path() {
    let err = Layout::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn sides_too_narrow_for_thirteen_cards_are_rejected() {
    let mut layout = Layout::ibb6();
    layout.boxes.north = Rect::new(0.0, 120.0, 5.0, 245.0);
    let err = layout.validate().unwrap_err().to_string();
    assert!(err.contains("side N"), "{err}");
    assert!(layout.slots().is_err());

    let mut layout = Layout::ibb6();
    layout.boxes.east = Rect::new(668.0, 336.0, 746.0, 346.0);
    assert!(layout.validate().is_err());
}

#[test]
fn screens_beyond_i32_pixels_are_rejected() {
    let mut layout = Layout::ibb6();
    layout.screen = Screen::new(4_000_000_000, 1334);
    layout.boxes.north = Rect::new(0.0, 120.0, 3.9e9, 245.0);
    let err = layout.validate().unwrap_err().to_string();
    assert!(err.contains("exceeds"), "{err}");

    let mut layout = Layout::ibb6();
    layout.screen = Screen::new(i32::MAX as u32, 1334);
    layout.boxes.north = Rect::new(0.0, 120.0, 2.0e9, 245.0);
    let table = layout.slots().unwrap();
    let last = table.get(SlotKey::new(Side::North, 12)).unwrap().pixel_box();
    assert_eq!(last.x2, 1_999_999_999);
    assert!(last.width() > 1);
}
