use std::fs;

use tempfile::tempdir;

use moodmate_backend::models::{Mood, SymptomCategory};
use moodmate_backend::store::{JournalStore, StoreError, MOOD_KEY, SYMPTOM_KEY};

#[test]
fn add_mood_prepends_and_grows_by_one() {
    let dir = tempdir().expect("tempdir");
    let mut store = JournalStore::open(dir.path());

    store.add_mood(Mood::Happy, 4, None).expect("first add");
    assert_eq!(store.list_moods().len(), 1);

    let second = store
        .add_mood(Mood::Anxious, 2, Some("long day".to_string()))
        .expect("second add");
    let moods = store.list_moods();
    assert_eq!(moods.len(), 2);
    assert_eq!(moods[0].id, second.id);
    assert_eq!(moods[0].mood, Mood::Anxious);
    assert_eq!(moods[1].mood, Mood::Happy);
}

#[test]
fn add_symptom_prepends_and_grows_by_one() {
    let dir = tempdir().expect("tempdir");
    let mut store = JournalStore::open(dir.path());

    store
        .add_symptom(SymptomCategory::Headache, 3, None)
        .expect("first add");
    let newest = store
        .add_symptom(SymptomCategory::Cramps, 5, None)
        .expect("second add");

    let symptoms = store.list_symptoms();
    assert_eq!(symptoms.len(), 2);
    assert_eq!(symptoms[0].id, newest.id);
    assert_eq!(symptoms[0].category, SymptomCategory::Cramps);
}

#[test]
fn out_of_range_intensity_is_rejected_and_store_unchanged() {
    let dir = tempdir().expect("tempdir");
    let mut store = JournalStore::open(dir.path());

    for bad in [0u8, 6, 200] {
        let err = store.add_mood(Mood::Sad, bad, None).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)), "intensity {bad}");
        let err = store.add_symptom(SymptomCategory::Nausea, bad, None).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)), "intensity {bad}");
    }
    assert!(store.list_moods().is_empty());
    assert!(store.list_symptoms().is_empty());
}

#[test]
fn reopen_restores_both_collections_exactly() {
    let dir = tempdir().expect("tempdir");

    let (moods_before, symptoms_before) = {
        let mut store = JournalStore::open(dir.path());
        store
            .add_mood(Mood::Calm, 3, Some("slow morning".to_string()))
            .expect("add mood");
        store.add_mood(Mood::Tired, 2, None).expect("add mood");
        store
            .add_symptom(SymptomCategory::BackPain, 4, None)
            .expect("add symptom");
        (store.list_moods().to_vec(), store.list_symptoms().to_vec())
    };

    // Simulated restart: a fresh store over the same data dir.
    let reopened = JournalStore::open(dir.path());
    assert_eq!(reopened.list_moods(), moods_before.as_slice());
    assert_eq!(reopened.list_symptoms(), symptoms_before.as_slice());
    assert_eq!(reopened.list_moods()[1].notes.as_deref(), Some("slow morning"));
    assert_eq!(reopened.list_moods()[0].notes, None);
}

#[test]
fn corrupt_snapshot_falls_back_to_empty_without_touching_the_other() {
    let dir = tempdir().expect("tempdir");

    {
        let mut store = JournalStore::open(dir.path());
        store.add_mood(Mood::Happy, 5, None).expect("add mood");
        store
            .add_symptom(SymptomCategory::Fatigue, 2, None)
            .expect("add symptom");
    }
    fs::write(dir.path().join(format!("{MOOD_KEY}.json")), "{not json")
        .expect("corrupt mood snapshot");

    let reopened = JournalStore::open(dir.path());
    assert!(reopened.list_moods().is_empty());
    assert_eq!(reopened.list_symptoms().len(), 1);
}

#[test]
fn clear_all_is_idempotent_and_removes_snapshots() {
    let dir = tempdir().expect("tempdir");
    let mut store = JournalStore::open(dir.path());
    store.add_mood(Mood::Angry, 4, None).expect("add mood");
    store
        .add_symptom(SymptomCategory::Bloating, 1, None)
        .expect("add symptom");

    store.clear_all().expect("first clear");
    assert!(store.list_moods().is_empty());
    assert!(store.list_symptoms().is_empty());
    assert!(!dir.path().join(format!("{MOOD_KEY}.json")).exists());
    assert!(!dir.path().join(format!("{SYMPTOM_KEY}.json")).exists());

    // Second clear on an already-empty store must not error.
    store.clear_all().expect("second clear");
    assert!(store.list_moods().is_empty());
    assert!(store.list_symptoms().is_empty());
}

#[test]
fn recent_moods_is_a_prefix_of_the_full_list() {
    let dir = tempdir().expect("tempdir");
    let mut store = JournalStore::open(dir.path());
    for i in 0..6 {
        let mood = Mood::ALL[i % Mood::ALL.len()];
        store.add_mood(mood, 3, None).expect("add mood");
    }

    let recent = store.recent_moods(4);
    assert_eq!(recent.len(), 4);
    assert_eq!(recent, &store.list_moods()[..4]);

    // Limit past the end returns everything.
    assert_eq!(store.recent_moods(100).len(), 6);
}

#[test]
fn entry_ids_are_unique() {
    let dir = tempdir().expect("tempdir");
    let mut store = JournalStore::open(dir.path());
    for _ in 0..10 {
        store.add_mood(Mood::Calm, 3, None).expect("add mood");
    }
    let mut ids: Vec<_> = store.list_moods().iter().map(|e| e.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
