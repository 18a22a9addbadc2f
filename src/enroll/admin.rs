use std::sync::Arc;

use tracing::debug;

use crate::catalog::{lecturer_names, CatalogIndex};
use crate::common::{RegistrarError, Result, LIST_DELIMITER};
use crate::record::{Course, RecordStore};

/// Catalog maintenance operations for the administrative screens. These
/// act on the catalog without a student context, so they live apart from
/// the per-student [`EnrollmentEngine`](crate::enroll::EnrollmentEngine);
/// no credit-load or prerequisite checks apply here.
pub struct CatalogAdmin {
    store: Arc<RecordStore>,
}

impl CatalogAdmin {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Returns all course codes in catalog order.
    pub fn course_codes(&self) -> Result<Vec<String>> {
        let table = self.store.load_courses()?;
        Ok(CatalogIndex::new(&table).codes())
    }

    /// Returns the display names of all lecturer accounts.
    pub fn lecturer_names(&self) -> Result<Vec<String>> {
        let accounts = self.store.load_accounts()?;
        Ok(lecturer_names(&accounts))
    }

    /// Overwrites the course's lecturer assignment unconditionally and
    /// persists. Returns whether a course with that code existed; an
    /// unknown code is a no-op, per the engine's lookup leniency.
    pub fn assign_lecturer(&self, code: &str, lecturer: &str) -> Result<bool> {
        let mut table = self.store.load_courses()?;

        let assigned = match table.find_mut(code) {
            Some(course) => {
                course.lecturers = vec![lecturer.to_string()];
                true
            }
            None => false,
        };

        table.sort_by_credits();
        self.store.save_courses(&table)?;

        if assigned {
            debug!(code, lecturer, "assigned lecturer");
        }
        Ok(assigned)
    }

    /// Adds a new course with an empty roster and no assigned lecturer,
    /// inserted at its credit-sorted position.
    ///
    /// The code is uppercased. Prerequisites are given as a `;`-joined
    /// string; blank means none. Rejects an empty code, an empty or
    /// unparsable or non-positive credit weight, and a code already in
    /// the catalog.
    pub fn add_course(&self, code: &str, credit_text: &str, prerequisites: &str) -> Result<()> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(RegistrarError::InvalidInput(
                "course code must not be empty".to_string(),
            ));
        }

        let credits: u32 = credit_text.trim().parse().map_err(|_| {
            RegistrarError::InvalidInput(format!(
                "credit weight {credit_text:?} is not a positive integer"
            ))
        })?;
        if credits == 0 {
            return Err(RegistrarError::InvalidInput(
                "credit weight must be positive".to_string(),
            ));
        }

        let prerequisites: Vec<String> = if prerequisites.trim().is_empty() {
            Vec::new()
        } else {
            prerequisites
                .split(LIST_DELIMITER)
                .map(|p| p.trim().to_string())
                .collect()
        };

        let mut table = self.store.load_courses()?;
        if table.contains_code(&code) {
            return Err(RegistrarError::DuplicateCourse(code));
        }

        debug!(code = %code, credits, "adding course");
        table.insert_sorted(Course::new(code, credits, prerequisites));
        self.store.save_courses(&table)
    }
}
