use std::fs;
use std::sync::Arc;

use registrar::auth::Authenticator;
use registrar::enroll::CatalogAdmin;
use registrar::record::{Account, RecordStore, Role};
use registrar::RegistrarError;

use tempfile::TempDir;

fn seeded_store() -> (Arc<RecordStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(RecordStore::new(
        dir.path().join("database.csv"),
        dir.path().join("courses.csv"),
    ));

    store
        .save_accounts(&[
            Account::new(Role::Student, "alice", "Alice", "1001", "pw"),
            Account::new(Role::Lecturer, "smith", "Dr. Smith", "42", "pw"),
        ])
        .unwrap();

    fs::write(
        store.courses_path(),
        "Credits,Course Code,Prerequisite,Students,Lecturer\n\
         3 Credits,CS101,Nil,-,no assigned lecturer\n\
         9 Credits,CS300,CS101,-,no assigned lecturer\n",
    )
    .unwrap();

    (store, dir)
}

#[test]
fn test_add_course_keeps_table_sorted() {
    let (store, _dir) = seeded_store();
    let admin = CatalogAdmin::new(store.clone());

    admin.add_course("cs250", "6", "").unwrap();
    admin.add_course("CS150", "3", "CS101").unwrap();

    let table = store.load_courses().unwrap();
    let weights: Vec<u32> = table.iter().map(|c| c.credits).collect();
    assert!(weights.windows(2).all(|w| w[0] <= w[1]));

    // Codes are stored uppercased; a 3-credit insertion lands before the
    // existing 3-credit row.
    assert_eq!(admin.course_codes().unwrap(), vec!["CS150", "CS101", "CS250", "CS300"]);

    let new_course = table.find("CS150").unwrap();
    assert_eq!(new_course.prerequisites, vec!["CS101"]);
    assert!(new_course.roster.is_empty());
    assert!(new_course.lecturers.is_empty());
}

#[test]
fn test_add_course_rejects_bad_input() {
    let (store, _dir) = seeded_store();
    let admin = CatalogAdmin::new(store.clone());

    assert!(matches!(
        admin.add_course("", "3", ""),
        Err(RegistrarError::InvalidInput(_))
    ));
    assert!(matches!(
        admin.add_course("CS500", "", ""),
        Err(RegistrarError::InvalidInput(_))
    ));
    assert!(matches!(
        admin.add_course("CS500", "three", ""),
        Err(RegistrarError::InvalidInput(_))
    ));
    assert!(matches!(
        admin.add_course("CS500", "0", ""),
        Err(RegistrarError::InvalidInput(_))
    ));
    assert!(matches!(
        admin.add_course("cs101", "3", ""),
        Err(RegistrarError::DuplicateCourse(_))
    ));

    // Nothing was persisted by the rejected calls.
    assert_eq!(store.load_courses().unwrap().len(), 2);
}

#[test]
fn test_assign_lecturer_overwrites() {
    let (store, _dir) = seeded_store();
    let admin = CatalogAdmin::new(store.clone());

    assert!(admin.assign_lecturer("CS101", "Dr. Smith").unwrap());
    let table = store.load_courses().unwrap();
    assert_eq!(table.find("CS101").unwrap().lecturers, vec!["Dr. Smith"]);

    // Unconditional overwrite, no checks against the accounts table.
    assert!(admin.assign_lecturer("CS101", "Dr. Jones").unwrap());
    let table = store.load_courses().unwrap();
    assert_eq!(table.find("CS101").unwrap().lecturers, vec!["Dr. Jones"]);

    assert!(!admin.assign_lecturer("CS999", "Dr. Smith").unwrap());
}

#[test]
fn test_lecturer_names_feed() {
    let (store, _dir) = seeded_store();
    let admin = CatalogAdmin::new(store);
    assert_eq!(admin.lecturer_names().unwrap(), vec!["Dr. Smith"]);
}

#[test]
fn test_account_creation_and_login() {
    let (store, _dir) = seeded_store();
    let auth = Authenticator::new(store);

    auth.create_account(&Account::new(Role::Student, "bob", "Bob", "1002", "pw2"))
        .unwrap();

    let identity = auth.login("bob", "pw2").unwrap().unwrap();
    assert_eq!(identity.role, Role::Student);
    assert_eq!(identity.display_name, "Bob");

    assert!(matches!(
        auth.create_account(&Account::new(Role::Student, "bob", "Other Bob", "9", "x")),
        Err(RegistrarError::InvalidInput(_))
    ));
}
