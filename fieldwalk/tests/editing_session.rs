use fieldwalk::{
    DocumentFormat, InterfaceDocument,
    data::{deep_clone, differs, process, value_by_path, value_by_path_mut},
    defaults, path,
    schema::{self, FieldKind},
    walk,
};
use serde_json::{Value, json};

const DOC: &str = r#"{
  "locales": {"en-US": "English (US)", "fr-FR": "Français"},
  "sections": {
    "home": {
      "type": "group",
      "fields": {
        "title": {"type": "i18n"},
        "published": {"type": "i18n:date"},
        "tags": {"type": "select", "multiple": true},
        "slides": {
          "type": "array",
          "fields": {
            "image": {"type": "image"},
            "caption": {"type": "i18n:wysiwyg"}
          }
        }
      }
    }
  }
}"#;

fn load() -> InterfaceDocument {
    InterfaceDocument::parse(DOC, DocumentFormat::Json, "1.0.0").unwrap()
}

#[test]
fn test_initialize_then_walk() {
    let doc = load();
    let mut data = json!({ "home": doc.initialize_section("home").unwrap() });
    assert_eq!(
        data["home"],
        json!({
            "title": {"en-US": "", "fr-FR": ""},
            "published": {"en-US": "", "fr-FR": ""},
            "tags": [],
            "slides": []
        })
    );

    // Append two slides the way an editor would.
    let slides_field = schema::definition_by_path(&doc.sections, "home.slides").unwrap();
    let locales = doc.locale_codes();
    let slides = value_by_path_mut(&mut data, "home.slides")
        .and_then(Value::as_array_mut)
        .unwrap();
    slides.push(defaults::new_element(slides_field, &locales));
    slides.push(defaults::new_element(slides_field, &locales));
    *value_by_path_mut(&mut data, "home.slides[1].caption.fr-FR").unwrap() = json!("<p>Bonjour</p>");

    let mut visits = Vec::new();
    walk::walk_with_paths(&doc.sections, &data, |p, field, value| {
        visits.push((p.to_string(), field.field_type.kind.clone(), value.cloned()));
    });

    let paths: Vec<_> = visits.iter().map(|(p, _, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "home",
            "home.title",
            "home.published",
            "home.tags",
            "home.slides",
            "home.slides[0].image",
            "home.slides[0].caption",
            "home.slides[1].image",
            "home.slides[1].caption",
        ]
    );
    assert_eq!(visits[5].1, FieldKind::Image);
    assert_eq!(visits[5].2, Some(Value::Null));
    assert_eq!(
        visits[8].2,
        Some(json!({"en-US": "", "fr-FR": "<p>Bonjour</p>"}))
    );
}

#[test]
fn test_change_tracking_with_snapshot() {
    let doc = load();
    let mut data = json!({ "home": doc.initialize_section("home").unwrap() });
    let snapshot = deep_clone(&data);
    assert!(!differs(&data, &snapshot, None));

    *value_by_path_mut(&mut data, "home.title.en-US").unwrap() = json!("Welcome");
    assert!(differs(&data, &snapshot, None));
    assert_eq!(value_by_path(&snapshot, "home.title.en-US"), Some(&json!("")));

    // Only the changed field differs.
    let changed: Vec<&str> = ["title", "published", "tags", "slides"]
        .into_iter()
        .filter(|key| differs(&data["home"], &snapshot["home"], Some(&[*key][..])))
        .collect();
    assert_eq!(changed, vec!["title"]);
}

#[test]
fn test_leaf_listing_treats_lists_as_leaves() {
    let doc = load();
    let data = json!({ "home": doc.initialize_section("home").unwrap() });

    let mut leaves = Vec::new();
    process(&data, |_, _, p| leaves.push(p.to_string()));
    assert_eq!(
        leaves,
        vec![
            "home.title.en-US",
            "home.title.fr-FR",
            "home.published.en-US",
            "home.published.fr-FR",
            "home.tags",
            "home.slides",
        ]
    );
}

#[test]
fn test_schema_lookup_ignores_indices_only_when_stripped() {
    let doc = load();
    let literal = "home.slides[3].caption";

    let raw = schema::definition_by_path(&doc.sections, literal).unwrap();
    assert!(raw.field_type.is_plain_array());

    let stripped = schema::definition_by_path(&doc.sections, &path::strip_indices(literal)).unwrap();
    assert!(stripped.field_type.localized);
    assert_eq!(stripped.field_type.kind, FieldKind::Wysiwyg);
}

#[test]
fn test_accessor_asymmetry() {
    let doc = load();
    let data = json!({"home": {"title": {"en-US": "Hi"}}});

    // Data lookup is strict.
    assert_eq!(value_by_path(&data, "home.title.de-DE.x"), None);
    // Schema lookup falls back to the last node it resolved.
    let title = schema::definition_by_path(&doc.sections, "home.title.de-DE.x").unwrap();
    assert_eq!(title.field_type.kind, FieldKind::I18n);
}
