//! Registrar - A flat-file course registration engine in Rust
//!
//! This crate implements the rules engine behind a course registration
//! system: credit-load bounds, prerequisite checks, duplicate-registration
//! prevention, cart-based batch commit, and a credit-sorted course catalog,
//! all over two shared flat-file tables (accounts and courses).
//!
//! # Architecture
//!
//! The system is organized into several layers:
//!
//! - **Record Store** (`record`): Typed rows and flat-file persistence
//!   - `Account`/`Role`: one row per user of the accounts table
//!   - `Course`/`CourseTable`: the credit-sorted courses table
//!   - `RecordStore`: whole-table load/save with atomic replacement
//!
//! - **Catalog** (`catalog`): Read-only views derived from the table
//!   - `CatalogIndex`: code/credit lookups over the committed rows
//!   - `SubjectClassifier`: registered/available partitions per student
//!
//! - **Enrollment** (`enroll`): The registration state machine
//!   - `Cart`: staged, uncommitted selections for one session
//!   - `PrerequisiteResolver`: direct-prerequisite satisfaction
//!   - `EnrollmentEngine`: validated register/drop with per-entry commit
//!   - `CatalogAdmin`: lecturer assignment and new-course insertion
//!
//! - **Auth** (`auth`): Identity provider over the accounts table
//!
//! The engine returns typed outcomes and never formats UI text; the
//! presentation layer is an external collaborator.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use registrar::enroll::EnrollmentEngine;
//! use registrar::record::RecordStore;
//!
//! let store = Arc::new(RecordStore::new("database.csv", "courses.csv"));
//! let mut engine = EnrollmentEngine::new(store, "Alice");
//!
//! engine.add_to_cart("CS101", "CS101, Dr. Smith");
//! let outcomes = engine.commit_cart().unwrap();
//! for outcome in &outcomes {
//!     println!("{}: {:?}", outcome.entry.code, outcome.result);
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod common;
pub mod enroll;
pub mod record;

// Re-export commonly used types at the crate root
pub use common::{RegistrarError, Result};
pub use enroll::{CatalogAdmin, EnrollmentEngine};
pub use record::{Account, Course, CourseTable, RecordStore, Role};
