use wordsearch::{Difficulty, Settings, SettingsStore, RANDOM_CATEGORY};

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());

    let settings = Settings {
        category: "Animals".to_string(),
        difficulty: Difficulty::Hard,
        count: 7,
    };
    store.save("wordsearch", &settings);
    assert_eq!(store.load("wordsearch"), settings);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());

    let settings = store.load("wordsearch");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.category, RANDOM_CATEGORY);
    assert_eq!(settings.difficulty, Difficulty::Easy);
    assert_eq!(settings.count, 4);
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    std::fs::write(dir.path().join("config_wordsearch.json"), "{not json").unwrap();

    assert_eq!(store.load("wordsearch"), Settings::default());
}

#[test]
fn test_restored_count_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());

    std::fs::write(
        dir.path().join("config_wordsearch.json"),
        r#"{"category": "Colors", "difficulty": "medium", "count": 99}"#,
    )
    .unwrap();
    let settings = store.load("wordsearch");
    assert_eq!(settings.count, 10);
    assert_eq!(settings.category, "Colors");
    assert_eq!(settings.difficulty, Difficulty::Medium);

    std::fs::write(
        dir.path().join("config_wordsearch.json"),
        r#"{"category": "Colors", "difficulty": "easy", "count": 0}"#,
    )
    .unwrap();
    assert_eq!(store.load("wordsearch").count, 4);
}

#[test]
fn test_stores_are_keyed_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());

    let settings = Settings {
        category: "Food".to_string(),
        difficulty: Difficulty::Medium,
        count: 6,
    };
    store.save("wordsearch", &settings);
    assert_eq!(store.load("othergame"), Settings::default());
}
