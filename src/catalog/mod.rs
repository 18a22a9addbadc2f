mod classifier;
mod index;

pub use classifier::SubjectClassifier;
pub use index::{lecturer_names, CatalogIndex};
