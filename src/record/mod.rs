mod account;
mod course;
mod store;

pub use account::{Account, Role};
pub use course::{Course, CourseTable};
pub use store::RecordStore;
