use content_planner::{
    JsonFileStorage, PersistenceError, PlanEntry, PlanField, PlanStorage, load_plans_from_json,
    save_plans_to_json,
};
use std::fs;
use tempfile::{NamedTempFile, tempdir};

fn entry(topic: &str) -> PlanEntry {
    let mut entry = PlanEntry::default();
    for field in PlanField::ALL {
        entry.set(field, format!("{} for {topic}", field.label()));
    }
    entry.video_topic = topic.to_string();
    entry
}

#[test]
fn json_round_trip_preserves_order_and_content() {
    let mut tricky = entry("Café ☕ review: \"best\" beans, ranked");
    tricky.target_keywords = "coffee, café, 咖啡".into();
    tricky.feedback_and_adjustments = "Video Topic: fake, Date: {'x'}".into();
    let plans = vec![entry("First"), tricky, entry("Third")];
    let file = NamedTempFile::new().unwrap();

    save_plans_to_json(&plans, file.path()).unwrap();
    let loaded = load_plans_from_json(file.path()).unwrap();

    assert_eq!(loaded, plans);
}

#[test]
fn empty_sequence_round_trips() {
    let file = NamedTempFile::new().unwrap();
    save_plans_to_json(&[], file.path()).unwrap();
    assert!(load_plans_from_json(file.path()).unwrap().is_empty());
}

#[test]
fn saved_file_is_indented_unescaped_and_ordered() {
    let mut plan = entry("Ünïcödé");
    plan.date = "05/06/2025".into();
    let file = NamedTempFile::new().unwrap();
    save_plans_to_json(&[plan], file.path()).unwrap();

    let text = fs::read_to_string(file.path()).unwrap();
    assert!(text.starts_with("[\n    {\n        \"Date\": \"05/06/2025\","));
    assert!(text.contains("\"Video Topic\": \"Ünïcödé\""));
    assert!(!text.contains("\\u"));

    let positions: Vec<usize> = PlanField::ALL
        .iter()
        .map(|field| text.find(&format!("\"{}\":", field.label())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn save_overwrites_previous_contents() {
    let file = NamedTempFile::new().unwrap();
    save_plans_to_json(&[entry("a"), entry("b")], file.path()).unwrap();
    save_plans_to_json(&[entry("c")], file.path()).unwrap();

    let loaded = load_plans_from_json(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].video_topic, "c");
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempdir().unwrap();
    let err = load_plans_from_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
}

#[test]
fn malformed_file_reports_serialization_error() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "[{\"Date\": \"01/01/2025\",").unwrap();
    let err = load_plans_from_json(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::Serialization(_)));
}

#[test]
fn missing_keys_load_as_empty_strings() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"[{"Video Topic": "Only topic", "Extra": "ignored"}]"#,
    )
    .unwrap();

    let loaded = load_plans_from_json(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].video_topic, "Only topic");
    assert_eq!(loaded[0].date, "");
}

#[test]
fn json_file_storage_uses_its_path() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("plans.json"));
    storage.save_plans(&[entry("Stored")]).unwrap();

    assert!(storage.path().exists());
    assert_eq!(storage.load_plans().unwrap()[0].video_topic, "Stored");
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("plans.json");
    let err = save_plans_to_json(&[entry("x")], &path).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
}
