use crate::record::{Account, Course, CourseTable, Role};

/// Read-only lookups derived from a courses table.
///
/// The index borrows the table instead of copying it; callers re-derive it
/// after every mutation, so lookups always reflect the committed rows.
/// Catalog maintenance that reorders the table (`insert_sorted`,
/// `sort_by_credits`) lives on [`CourseTable`] itself.
pub struct CatalogIndex<'a> {
    table: &'a CourseTable,
}

impl<'a> CatalogIndex<'a> {
    pub fn new(table: &'a CourseTable) -> Self {
        Self { table }
    }

    /// Returns all course codes in table order (ascending credit weight).
    pub fn codes(&self) -> Vec<String> {
        self.table.iter().map(|c| c.code.clone()).collect()
    }

    /// Returns the course with the given code, case-insensitive exact match.
    pub fn find_by_code(&self, code: &str) -> Option<&'a Course> {
        self.table.find(code)
    }

    /// Returns the credit weight for a course code, or 0 when the course
    /// is absent. Weight-0 rows from unparsable stored labels also land
    /// here; the store logs those at load time.
    pub fn credit_weight(&self, code: &str) -> u32 {
        self.find_by_code(code).map_or(0, |c| c.credits)
    }

    /// Recomputes a student's committed credit load from the table: the
    /// sum of weights of every course whose roster contains the student.
    pub fn registered_load(&self, student: &str) -> u32 {
        self.table
            .iter()
            .filter(|c| c.is_enrolled(student))
            .map(|c| c.credits)
            .sum()
    }
}

/// Returns the display names of all lecturer accounts, in table order.
pub fn lecturer_names(accounts: &[Account]) -> Vec<String> {
    accounts
        .iter()
        .filter(|a| a.role == Role::Lecturer)
        .map(|a| a.display_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CourseTable {
        CourseTable::parse(
            "3 Credits,CS101,Nil,Alice,no assigned lecturer\n\
             6 Credits,CS200,Nil,Alice;Bob,Dr. Smith\n\
             9 Credits,CS300,CS101,-,no assigned lecturer\n",
        )
    }

    #[test]
    fn test_codes_in_table_order() {
        let table = sample_table();
        let index = CatalogIndex::new(&table);
        assert_eq!(index.codes(), vec!["CS101", "CS200", "CS300"]);
    }

    #[test]
    fn test_find_by_code_case_insensitive() {
        let table = sample_table();
        let index = CatalogIndex::new(&table);
        assert_eq!(index.find_by_code("cs200").unwrap().credits, 6);
        assert!(index.find_by_code("CS999").is_none());
    }

    #[test]
    fn test_credit_weight_missing_course_is_zero() {
        let table = sample_table();
        let index = CatalogIndex::new(&table);
        assert_eq!(index.credit_weight("CS300"), 9);
        assert_eq!(index.credit_weight("CS999"), 0);
    }

    #[test]
    fn test_registered_load() {
        let table = sample_table();
        let index = CatalogIndex::new(&table);
        assert_eq!(index.registered_load("Alice"), 9);
        assert_eq!(index.registered_load("Bob"), 6);
        assert_eq!(index.registered_load("Carol"), 0);
    }

    #[test]
    fn test_lecturer_names() {
        let accounts = vec![
            Account::new(Role::Student, "jdoe", "John Doe", "1", "x"),
            Account::new(Role::Lecturer, "asmith", "Dr. Smith", "2", "y"),
            Account::new(Role::Lecturer, "bjones", "Dr. Jones", "3", "z"),
        ];
        assert_eq!(lecturer_names(&accounts), vec!["Dr. Smith", "Dr. Jones"]);
    }
}
