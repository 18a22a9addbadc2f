use std::sync::Arc;

use registrar::auth::Authenticator;
use registrar::enroll::{CatalogAdmin, EnrollmentEngine};
use registrar::record::{Account, Course, RecordStore, Role};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registrar=info".into()),
        )
        .init();

    println!("Registrar - A flat-file course registration engine");
    println!("==================================================\n");

    let accounts_path = "demo_database.csv";
    let courses_path = "demo_courses.csv";

    let store = Arc::new(RecordStore::new(accounts_path, courses_path));

    // Seed the two tables
    store
        .save_accounts(&[
            Account::new(Role::Student, "alice", "Alice", "1001", "pw"),
            Account::new(Role::Lecturer, "smith", "Dr. Smith", "42", "pw"),
        ])
        .expect("Failed to seed accounts");

    store
        .init_courses(
            "Credits,Course Code,Prerequisite,Students,Lecturer",
            vec![
                Course::new("CS101", 3, Vec::new()),
                Course::new("CS200", 6, Vec::new()),
                Course::new("CS300", 9, vec!["CS101".to_string()]),
            ],
        )
        .expect("Failed to seed courses");
    println!("Seeded tables: {} and {}\n", accounts_path, courses_path);

    // Log in as the student
    let auth = Authenticator::new(store.clone());
    let identity = auth
        .login_as(Role::Student, "alice", "pw")
        .expect("Failed to read accounts")
        .expect("Login rejected");
    println!("Logged in as: {}", identity.display_name);

    // Assign a lecturer through the admin operations
    let admin = CatalogAdmin::new(store.clone());
    admin
        .assign_lecturer("CS101", "Dr. Smith")
        .expect("Failed to assign lecturer");
    println!("Assigned Dr. Smith to CS101\n");

    // Stage a cart and commit it
    let mut engine = EnrollmentEngine::new(store.clone(), identity.display_name);
    engine.add_to_cart("CS101", "CS101, Dr. Smith");
    engine.add_to_cart("CS300", "CS300, no assigned lecturer");

    let total = engine.view_cart_total().expect("Failed to total cart");
    println!("Cart total: {} credits", total);

    let outcomes = engine.commit_cart().expect("Commit aborted");
    for outcome in &outcomes {
        match &outcome.result {
            Ok(credits) => println!("  registered {} ({} credits)", outcome.entry.code, credits),
            Err(reason) => println!("  rejected {}: {}", outcome.entry.code, reason),
        }
    }

    let load = engine.current_load().expect("Failed to compute load");
    println!("\nCommitted credit load: {}", load);

    let current = engine.current_subjects().expect("Failed to list subjects");
    println!("Current subjects: {:?}", current);
    let future = engine.future_subjects().expect("Failed to list subjects");
    println!("Future subjects: {:?}", future);

    // Clean up the demo tables
    std::fs::remove_file(accounts_path).ok();
    std::fs::remove_file(courses_path).ok();
    println!("\nDemo completed successfully!");
}
