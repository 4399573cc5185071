use acadstore_core::db::open_db_in_memory;
use acadstore_core::{SqliteSubjectRepository, SubjectRepository, SubjectService};
use serde_json::{json, Value};

fn subject(name: &str, code: &str, category: &str) -> Value {
    json!({"name": name, "code": code, "category": category})
}

#[test]
fn save_then_get_returns_list_in_submission_order() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteSubjectRepository::try_new(&mut conn).unwrap();

    let list = vec![
        subject("Maths", "M101", "Core"),
        subject("Physics", "P102", "Core"),
        subject("Sketching", "A103", "Elective"),
    ];
    repo.save_subjects("cse", 1, &list).unwrap();

    assert_eq!(repo.get_subjects("cse", 1).unwrap(), list);
}

#[test]
fn save_replaces_stored_list_wholesale() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let mut repo = SqliteSubjectRepository::try_new(&mut conn).unwrap();

        let first = vec![
            subject("Maths", "M101", "Core"),
            subject("Physics", "P102", "Core"),
        ];
        let second = vec![subject("Chemistry", "C201", "Core")];

        repo.save_subjects("cse", 1, &first).unwrap();
        repo.save_subjects("cse", 1, &second).unwrap();

        // No merge: the first list is gone entirely.
        assert_eq!(repo.get_subjects("cse", 1).unwrap(), second);
    }

    let row_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM subject_lists;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(row_count, 1);
}

#[test]
fn get_unknown_pair_returns_empty_list() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteSubjectRepository::try_new(&mut conn).unwrap();

    assert!(repo.get_subjects("cse", 1).unwrap().is_empty());
    assert!(repo.get_subjects("", 42).unwrap().is_empty());
}

#[test]
fn lists_are_independent_per_department_and_semester() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteSubjectRepository::try_new(&mut conn).unwrap();

    let cse_sem1 = vec![subject("Maths", "M101", "Core")];
    let cse_sem2 = vec![subject("Data Structures", "CS201", "Core")];
    let ece_sem1 = vec![subject("Circuits", "EC101", "Core")];

    repo.save_subjects("cse", 1, &cse_sem1).unwrap();
    repo.save_subjects("cse", 2, &cse_sem2).unwrap();
    repo.save_subjects("ece", 1, &ece_sem1).unwrap();

    assert_eq!(repo.get_subjects("cse", 1).unwrap(), cse_sem1);
    assert_eq!(repo.get_subjects("cse", 2).unwrap(), cse_sem2);
    assert_eq!(repo.get_subjects("ece", 1).unwrap(), ece_sem1);
}

#[test]
fn saving_empty_list_stores_empty_not_absent() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let mut repo = SqliteSubjectRepository::try_new(&mut conn).unwrap();

        repo.save_subjects("cse", 1, &[subject("Maths", "M101", "Core")])
            .unwrap();
        repo.save_subjects("cse", 1, &[]).unwrap();

        // Indistinguishable from "never saved" for the caller.
        assert!(repo.get_subjects("cse", 1).unwrap().is_empty());
    }

    let row_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM subject_lists;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(row_count, 1);
}

#[test]
fn service_grow_list_end_to_end() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteSubjectRepository::try_new(&mut conn).unwrap();
    let mut service = SubjectService::new(repo);

    let one = vec![subject("Maths", "M101", "Core")];
    service.save_subjects("cse", 1, &one).unwrap();
    assert_eq!(service.get_subjects("cse", 1).unwrap(), one);

    let two = vec![
        subject("Maths", "M101", "Core"),
        subject("Physics", "P102", "Core"),
    ];
    service.save_subjects("cse", 1, &two).unwrap();

    let stored = service.get_subjects("cse", 1).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored, two);
}
