use crate::record::CourseTable;

/// Decides whether a student's current enrollments satisfy a course's
/// prerequisites. Only one level of direct prerequisites is checked;
/// there is no transitive resolution.
pub struct PrerequisiteResolver<'a> {
    table: &'a CourseTable,
}

impl<'a> PrerequisiteResolver<'a> {
    pub fn new(table: &'a CourseTable) -> Self {
        Self { table }
    }

    /// Returns true when every prerequisite of the course is a course the
    /// student is currently enrolled in. A course with no prerequisites
    /// passes unconditionally; an unknown course code fails.
    pub fn satisfies(&self, student: &str, code: &str) -> bool {
        let Some(course) = self.table.find(code) else {
            return false;
        };

        course
            .prerequisites
            .iter()
            .all(|prereq| self.is_enrolled_in(student, prereq))
    }

    fn is_enrolled_in(&self, student: &str, code: &str) -> bool {
        self.table
            .find(code)
            .is_some_and(|course| course.is_enrolled(student))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CourseTable {
        CourseTable::parse(
            "3 Credits,CS101,Nil,-,no assigned lecturer\n\
             6 Credits,CS200,Nil,Alice,no assigned lecturer\n\
             9 Credits,CS300,CS101,-,no assigned lecturer\n\
             9 Credits,CS400,CS101;CS200,-,no assigned lecturer\n",
        )
    }

    #[test]
    fn test_no_prerequisites_always_satisfied() {
        let table = sample_table();
        let resolver = PrerequisiteResolver::new(&table);
        assert!(resolver.satisfies("Alice", "CS101"));
        assert!(resolver.satisfies("Nobody", "CS101"));
    }

    #[test]
    fn test_unknown_course_is_never_satisfied() {
        let table = sample_table();
        let resolver = PrerequisiteResolver::new(&table);
        assert!(!resolver.satisfies("Alice", "CS999"));
    }

    #[test]
    fn test_single_prerequisite() {
        let mut table = sample_table();
        let resolver = PrerequisiteResolver::new(&table);
        assert!(!resolver.satisfies("Alice", "CS300"));

        table.find_mut("CS101").unwrap().enroll("Alice");
        let resolver = PrerequisiteResolver::new(&table);
        assert!(resolver.satisfies("Alice", "CS300"));
    }

    #[test]
    fn test_every_prerequisite_must_hold() {
        let mut table = sample_table();
        // Alice is enrolled in CS200 but not CS101.
        let resolver = PrerequisiteResolver::new(&table);
        assert!(!resolver.satisfies("Alice", "CS400"));

        table.find_mut("CS101").unwrap().enroll("Alice");
        let resolver = PrerequisiteResolver::new(&table);
        assert!(resolver.satisfies("Alice", "CS400"));
    }
}
