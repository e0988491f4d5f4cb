// Unit tests for MessageBundle
use navorder_core::context::Localizer;
use navorder_store::MessageBundle;
use std::io::Write;

#[test]
fn test_builtin_english() {
    let bundle = MessageBundle::default();
    assert_eq!(bundle.locale(), "en");
    assert_eq!(bundle.translate("input.firstelement"), "(first element)");
    assert_eq!(bundle.translate("input.lastelement"), "(last element)");
}

#[test]
fn test_region_falls_back_to_language() {
    let bundle = MessageBundle::new("de-AT");
    assert_eq!(bundle.translate("input.firstelement"), "(erstes Element)");
}

#[test]
fn test_unknown_locale_falls_back_to_english() {
    let bundle = MessageBundle::new("fr");
    assert_eq!(bundle.translate("input.lastelement"), "(last element)");
}

#[test]
fn test_unknown_key_echoes_key() {
    let bundle = MessageBundle::default();
    assert_eq!(bundle.translate("input.nochange"), "input.nochange");
}

#[test]
fn test_overrides_win() {
    let bundle = MessageBundle::new("de").with_message("input.firstelement", "Ganz oben");
    assert_eq!(bundle.translate("input.firstelement"), "Ganz oben");
    assert_eq!(bundle.translate("input.lastelement"), "(letztes Element)");
}

#[test]
fn test_load_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"input.lastelement": "At the end"}}"#).unwrap();

    let bundle = MessageBundle::default()
        .load_overrides(file.path())
        .unwrap();

    assert_eq!(bundle.translate("input.lastelement"), "At the end");
    assert_eq!(bundle.translate("input.firstelement"), "(first element)");
}

#[test]
fn test_load_overrides_rejects_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    assert!(MessageBundle::default().load_overrides(file.path()).is_err());
}
