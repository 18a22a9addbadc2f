use std::sync::Arc;

use tracing::debug;

use crate::catalog::{CatalogIndex, SubjectClassifier};
use crate::common::{RegistrarError, Result, MAX_CREDIT_LOAD, MIN_CREDIT_LOAD};
use crate::enroll::{Cart, CartEntry, PrerequisiteResolver};
use crate::record::RecordStore;

/// Per-entry result of a cart commit: the staged entry plus either the
/// credit weight that was applied or the rejection.
#[derive(Debug)]
pub struct EntryOutcome {
    pub entry: CartEntry,
    pub result: Result<u32>,
}

impl EntryOutcome {
    pub fn is_registered(&self) -> bool {
        self.result.is_ok()
    }
}

/// The per-student registration state machine.
///
/// The engine owns a transient cart and goes through the shared record
/// store for everything else: every mutating operation loads the courses
/// table, mutates it, and saves it back, so nothing is ever cached across
/// calls and other screens sharing the store never observe stale rows.
pub struct EnrollmentEngine {
    /// Shared record store
    store: Arc<RecordStore>,
    /// Display name of the active student
    student: String,
    /// Staged selections for this registration session
    cart: Cart,
}

impl EnrollmentEngine {
    pub fn new(store: Arc<RecordStore>, student: impl Into<String>) -> Self {
        Self {
            store,
            student: student.into(),
            cart: Cart::new(),
        }
    }

    /// Returns the active student's display name.
    pub fn student(&self) -> &str {
        &self.student
    }

    /// Returns the staged cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Stages a catalog selection. Nothing is validated here; duplicates
    /// are allowed and rejected by the commit step if they turn out to be
    /// true duplicate registrations.
    pub fn add_to_cart(&mut self, code: impl Into<String>, label: impl Into<String>) {
        self.cart.add(CartEntry::new(code, label));
    }

    /// Sums the credit weights of the staged entries against the current
    /// catalog. Unknown codes weigh 0.
    pub fn view_cart_total(&self) -> Result<u32> {
        let table = self.store.load_courses()?;
        let index = CatalogIndex::new(&table);
        Ok(self
            .cart
            .entries()
            .iter()
            .map(|entry| index.credit_weight(&entry.code))
            .sum())
    }

    /// Commits the cart.
    ///
    /// The cart total must land in the allowed credit-load window before
    /// anything is applied; a commit outside [3, 12] is rejected wholesale
    /// with no side effects and the cart is retained.
    ///
    /// Entries are then applied in cart order, each re-validated against
    /// the committed table as it stands at that point, so earlier entries
    /// consume credit budget before later ones are checked. A rejected
    /// entry does not abort the rest; only an I/O failure does. The cart
    /// is cleared once every entry has been processed, however many were
    /// rejected, and the outcomes are reported per entry.
    pub fn commit_cart(&mut self) -> Result<Vec<EntryOutcome>> {
        let total = self.view_cart_total()?;
        if total < MIN_CREDIT_LOAD {
            return Err(RegistrarError::CartBelowMinimum {
                total,
                min: MIN_CREDIT_LOAD,
            });
        }
        if total > MAX_CREDIT_LOAD {
            return Err(RegistrarError::CartAboveLimit {
                total,
                limit: MAX_CREDIT_LOAD,
            });
        }

        let entries: Vec<CartEntry> = self.cart.entries().to_vec();
        let mut outcomes = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.register(&entry.code) {
                Err(err @ RegistrarError::Io(_)) => return Err(err),
                result => outcomes.push(EntryOutcome { entry, result }),
            }
        }

        self.cart.clear();
        Ok(outcomes)
    }

    /// Validates and applies one registration against the committed table.
    /// Check order follows the commit contract: credit load, then
    /// duplicate enrollment, then prerequisites.
    fn register(&self, code: &str) -> Result<u32> {
        let mut table = self.store.load_courses()?;

        let index = CatalogIndex::new(&table);
        let adding = index.credit_weight(code);
        let current = index.registered_load(&self.student);

        if current + adding > MAX_CREDIT_LOAD {
            return Err(RegistrarError::CreditOverflow {
                code: code.to_string(),
                current,
                adding,
                limit: MAX_CREDIT_LOAD,
            });
        }

        if table.find(code).is_some_and(|c| c.is_enrolled(&self.student)) {
            return Err(RegistrarError::AlreadyRegistered(code.to_string()));
        }

        // An unknown code also fails here, matching the resolver contract.
        if !PrerequisiteResolver::new(&table).satisfies(&self.student, code) {
            return Err(RegistrarError::PrerequisiteUnmet(code.to_string()));
        }

        let course = table
            .find_mut(code)
            .ok_or_else(|| RegistrarError::CourseNotFound(code.to_string()))?;
        course.enroll(self.student.clone());

        self.store.save_courses(&table)?;
        debug!(student = %self.student, code, credits = adding, "registered");
        Ok(adding)
    }

    /// Removes the student from the course's roster and persists. Dropping
    /// a course the student is not enrolled in (or that does not exist) is
    /// a silent no-op that leaves the table content unchanged.
    pub fn drop_course(&self, code: &str) -> Result<()> {
        let mut table = self.store.load_courses()?;

        if let Some(course) = table.find_mut(code) {
            if course.withdraw(&self.student) {
                debug!(student = %self.student, code, "dropped");
            }
        }

        self.store.save_courses(&table)?;
        Ok(())
    }

    /// Recomputes the student's committed credit load from the table.
    pub fn current_load(&self) -> Result<u32> {
        let table = self.store.load_courses()?;
        Ok(CatalogIndex::new(&table).registered_load(&self.student))
    }

    /// Courses the student is registered in. The data model has no term
    /// field, so the past and current views both return this set.
    pub fn past_subjects(&self) -> Result<Vec<String>> {
        self.registered_subjects()
    }

    /// Courses the student is registered in.
    pub fn current_subjects(&self) -> Result<Vec<String>> {
        self.registered_subjects()
    }

    /// Courses the student is not yet registered in; also feeds the
    /// registration picker.
    pub fn future_subjects(&self) -> Result<Vec<String>> {
        let table = self.store.load_courses()?;
        Ok(SubjectClassifier::new(&table).available(&self.student))
    }

    fn registered_subjects(&self) -> Result<Vec<String>> {
        let table = self.store.load_courses()?;
        Ok(SubjectClassifier::new(&table).registered(&self.student))
    }
}
