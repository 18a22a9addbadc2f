mod admin;
mod cart;
mod engine;
mod prereq;

pub use admin::CatalogAdmin;
pub use cart::{Cart, CartEntry};
pub use engine::{EnrollmentEngine, EntryOutcome};
pub use prereq::PrerequisiteResolver;
