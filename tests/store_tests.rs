// Integration tests for the record store

use roster::errors::StoreError;
use roster::store::{RecordStore, StudentRecord};
use rustc_hash::FxHashSet;

fn ann() -> StudentRecord {
    StudentRecord::new(1, "Ann", "Lee", "CS101", 90)
}

#[test]
fn test_add_fresh_id_grows_store() {
    let mut store = RecordStore::new();
    assert!(store.add(ann()).is_ok());

    assert_eq!(store.len(), 1);
    assert!(store.exists(1));
    assert_eq!(store.find(1), Some(&ann()));
}

#[test]
fn test_add_duplicate_keeps_original() {
    let mut store = RecordStore::new();
    store.add(ann()).unwrap();

    let result = store.add(StudentRecord::new(1, "Bob", "Fox", "CS102", 70));

    assert_eq!(result, Err(StoreError::DuplicateId(1)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.find(1), Some(&ann()));
}

#[test]
fn test_delete_present_id() {
    let mut store = RecordStore::new();
    store.add(ann()).unwrap();
    store.add(StudentRecord::new(2, "Cy", "Ng", "MA200", 75)).unwrap();

    assert!(store.delete(1));
    assert_eq!(store.len(), 1);
    assert_eq!(store.find(1), None);
    assert!(!store.exists(1));
    assert!(store.exists(2));
}

#[test]
fn test_delete_absent_id() {
    let mut store = RecordStore::new();
    store.add(ann()).unwrap();

    assert!(!store.delete(9));
    assert_eq!(store.remove(9), Err(StoreError::NotFound(9)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_on_empty_store() {
    let mut store = RecordStore::new();

    assert!(!store.delete(5));
    assert_eq!(store.remove(5), Err(StoreError::Empty));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_list_all_empty() {
    let store = RecordStore::new();
    assert!(store.list_all().is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_list_all_insertion_order() {
    let r1 = StudentRecord::new(30, "Ann", "Lee", "CS101", 90);
    let r2 = StudentRecord::new(10, "Bob", "Fox", "CS102", 70);
    let r3 = StudentRecord::new(20, "Cy", "Ng", "MA200", 75);

    let mut store = RecordStore::new();
    store.add(r1.clone()).unwrap();
    store.add(r2.clone()).unwrap();
    store.add(r3.clone()).unwrap();

    assert_eq!(store.list_all(), vec![&r1, &r2, &r3]);
}

#[test]
fn test_order_survives_middle_delete_and_readd() {
    let mut store = RecordStore::new();
    for id in 1..=4 {
        store
            .add(StudentRecord::new(id, "F", "L", "C", id * 10))
            .unwrap();
    }

    store.delete(2);
    store.add(StudentRecord::new(2, "F", "L", "C", 99)).unwrap();

    let ids: Vec<i32> = store.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 2]);
    assert_eq!(store.find(2).map(|r| r.grade), Some(99));
}

#[test]
fn test_ids_stay_unique_across_mixed_operations() {
    let mut store = RecordStore::new();
    let ops: &[(bool, i32)] = &[
        (true, 1),
        (true, 2),
        (true, 1),
        (false, 2),
        (true, 2),
        (true, 3),
        (true, 3),
        (false, 7),
        (true, 7),
        (false, 1),
        (true, 1),
        (true, 2),
    ];

    for &(is_add, id) in ops {
        let before = store.len();
        if is_add {
            let was_present = store.exists(id);
            let result = store.add(StudentRecord::new(id, "F", "L", "C", 50));
            assert_eq!(result.is_ok(), !was_present);
            assert_eq!(store.len(), if was_present { before } else { before + 1 });
        } else {
            let removed = store.delete(id);
            assert_eq!(store.len(), if removed { before - 1 } else { before });
        }
    }

    let mut seen = FxHashSet::default();
    for record in &store {
        assert!(seen.insert(record.id), "duplicate id {}", record.id);
    }
    assert_eq!(seen.len(), store.len());
}

#[test]
fn test_record_display_forms() {
    let record = ann();
    assert_eq!(record.to_string(), "1 Ann Lee CS101 90");
    assert_eq!(
        record.card().to_string(),
        "Student ID: \t1\nFirst Name: \tAnn\nLast Name: \tLee\nCourse: \tCS101\nGrade: \t\t90"
    );
}
