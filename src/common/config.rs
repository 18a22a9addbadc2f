/// Minimum committed credit load required for a cart commit
pub const MIN_CREDIT_LOAD: u32 = 3;

/// Maximum committed credit load per student
pub const MAX_CREDIT_LOAD: u32 = 12;

/// Field delimiter within a table row
pub const FIELD_DELIMITER: char = ',';

/// Delimiter within multi-valued fields (prerequisites, rosters, lecturers)
pub const LIST_DELIMITER: char = ';';

/// Sentinel for a course with no prerequisites
pub const NO_PREREQUISITES: &str = "Nil";

/// Sentinel for a course with no enrolled students
pub const EMPTY_ROSTER: &str = "-";

/// Sentinel for a course with no assigned lecturer
pub const NO_LECTURER: &str = "no assigned lecturer";

/// Suffix of the serialized credit label ("<N> Credits")
pub const CREDIT_LABEL_SUFFIX: &str = "Credits";

/// Number of fields in an account row
pub const ACCOUNT_FIELD_COUNT: usize = 5;

/// Number of fields in a course row
pub const COURSE_FIELD_COUNT: usize = 5;
