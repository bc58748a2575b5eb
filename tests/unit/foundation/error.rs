use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardslotsError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardslotsError::format("x")
            .to_string()
            .contains("format error:")
    );
    assert!(
        CardslotsError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardslotsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: CardslotsError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CardslotsError::Serde(_)));
}

#[test]
fn fmt_errors_map_to_format_variant() {
    let err: CardslotsError = std::fmt::Error.into();
    assert!(matches!(err, CardslotsError::Format(_)));
    assert!(err.to_string().starts_with("format error:"));
}
