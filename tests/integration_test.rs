//! Integration tests for question loading, selection and fixtures

use dsquiz::core::seed::{ensure_question_bank, write_sample_bank};
use dsquiz::{fixture, select, QuestionRecord, QuestionStore, Topic};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

fn temp_csv_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("dsquiz-{}", uuid::Uuid::new_v4()))
        .join("questions.csv")
}

fn rows(topic: &str, difficulty: i64, count: i64) -> Vec<QuestionRecord> {
    (1..=count)
        .map(|id| QuestionRecord {
            id,
            topic: topic.to_string(),
            difficulty,
            question: format!("{} question {}", topic, id),
            answer: format!("answer {}", id),
        })
        .collect()
}

#[test]
fn test_short_bank_returns_every_match() {
    let mut bank = rows("Array", 2, 3);
    bank.extend(rows("Tree", 2, 4));
    let mut rng = StdRng::seed_from_u64(1);

    let result = select(&bank, "Array", 2, 5, &mut rng);

    assert_eq!(result.len(), 3, "Only 3 Array/2 rows exist");
    for question in &result {
        assert_eq!(question.record.topic, "Array");
        assert!((5..=10).contains(&question.values.len()));
        assert!(question.values.iter().all(|v| (1..=99).contains(v)));
    }
}

#[test]
fn test_sample_from_larger_bank() {
    let bank = rows("Tree", 1, 10);
    let mut rng = StdRng::seed_from_u64(2);

    let result = select(&bank, "Tree", 1, 4, &mut rng);

    assert_eq!(result.len(), 4);
    let ids: HashSet<i64> = result.iter().map(|q| q.record.id).collect();
    assert_eq!(ids.len(), 4, "Sample must not repeat a row");
    for question in &result {
        assert!(bank.contains(&question.record));
        assert!((7..=15).contains(&question.values.len()));
    }
}

#[test]
fn test_unmatched_difficulty_is_empty() {
    let bank = rows("Array", 2, 5);
    let mut rng = StdRng::seed_from_u64(3);
    assert!(select(&bank, "Array", 9, 3, &mut rng).is_empty());
}

#[test]
fn test_never_more_than_requested() {
    let mut bank = rows("Singly Linked List", 1, 6);
    bank.extend(rows("Singly Linked List", 2, 2));
    let mut rng = StdRng::seed_from_u64(4);

    for count in 0..10 {
        for difficulty in 0..4 {
            let result = select(&bank, "Singly Linked List", difficulty, count, &mut rng);
            assert!(result.len() <= count);
        }
    }
}

#[test]
fn test_sampling_varies_between_calls() {
    let bank = rows("Array", 1, 20);
    let mut rng = StdRng::seed_from_u64(5);

    let picks: HashSet<Vec<i64>> = (0..20)
        .map(|_| {
            let mut ids: Vec<i64> = select(&bank, "Array", 1, 3, &mut rng)
                .iter()
                .map(|q| q.record.id)
                .collect();
            ids.sort();
            ids
        })
        .collect();
    assert!(picks.len() > 1, "Different draws should pick different rows");
}

#[test]
fn test_unknown_topic_fixture() {
    let mut rng = StdRng::seed_from_u64(6);
    let bank = rows("Graph", 1, 3);

    let result = select(&bank, "Graph", 1, 2, &mut rng);
    assert_eq!(result.len(), 2, "Unknown topics are still served");
    assert!(result.iter().all(|q| q.values.is_empty()));
    assert!(fixture::generate("Heap", &mut rng).is_empty());
}

#[test]
fn test_store_round_trip_through_disk() {
    let path = temp_csv_path();
    let written = write_sample_bank(&path).unwrap();

    let store = QuestionStore::new(&path);
    let table = store.load();
    assert_eq!(table.len(), written);
    for topic in Topic::ALL {
        assert!(table.records.iter().any(|q| q.topic == topic.as_str()));
    }

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_store_missing_file_is_empty() {
    let store = QuestionStore::new(temp_csv_path());
    let table = store.load();
    assert!(table.is_empty());
    assert_eq!(
        table.columns(),
        &["id", "topic", "difficulty", "question", "answer"]
    );
}

#[test]
fn test_store_malformed_file_is_empty() {
    let path = temp_csv_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "id,topic,difficulty,question,answer\n1,Array,2,Q,A\nx,Array,2,Q,A\n")
        .unwrap();

    let table = QuestionStore::new(&path).load();
    assert!(table.is_empty(), "A bad row must not yield a partial bank");

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_store_rereads_on_every_load() {
    let path = temp_csv_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "id,topic,difficulty,question,answer\n1,Array,1,Q,A\n").unwrap();

    let store = QuestionStore::new(&path);
    assert_eq!(store.load().len(), 1);

    fs::write(
        &path,
        "id,topic,difficulty,question,answer\n1,Array,1,Q,A\n2,Tree,1,Q,A\n",
    )
    .unwrap();
    assert_eq!(store.load().len(), 2);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_ensure_bank_does_not_overwrite() {
    let path = temp_csv_path();
    assert!(ensure_question_bank(&path).unwrap());

    fs::write(&path, "id,topic,difficulty,question,answer\n1,Tree,1,Mine,Kept\n").unwrap();
    assert!(!ensure_question_bank(&path).unwrap());

    let table = QuestionStore::new(&path).load();
    assert_eq!(table.len(), 1);
    assert_eq!(table.records[0].answer, "Kept");

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}
