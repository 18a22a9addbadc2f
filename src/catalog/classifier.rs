use crate::record::CourseTable;

/// Partitions a student's relationship to each course in the table.
///
/// The registered set feeds both the "past" and "current" subject views:
/// the data model carries no term or date field, so the two views cannot
/// be distinguished and intentionally return the same codes. The
/// available set feeds the "future" view and the registration picker.
pub struct SubjectClassifier<'a> {
    table: &'a CourseTable,
}

impl<'a> SubjectClassifier<'a> {
    pub fn new(table: &'a CourseTable) -> Self {
        Self { table }
    }

    /// Course codes whose roster contains the student.
    pub fn registered(&self, student: &str) -> Vec<String> {
        self.table
            .iter()
            .filter(|c| c.is_enrolled(student))
            .map(|c| c.code.clone())
            .collect()
    }

    /// Course codes the student is not enrolled in: the complement of
    /// [`registered`](Self::registered).
    pub fn available(&self, student: &str) -> Vec<String> {
        self.table
            .iter()
            .filter(|c| !c.is_enrolled(student))
            .map(|c| c.code.clone())
            .collect()
    }

    /// All students across courses taught by the given lecturer,
    /// deduplicated, in table order.
    pub fn students_of_lecturer(&self, lecturer: &str) -> Vec<String> {
        let mut students: Vec<String> = Vec::new();
        for course in self.table.iter().filter(|c| c.has_lecturer(lecturer)) {
            for name in &course.roster {
                if !students.contains(name) {
                    students.push(name.clone());
                }
            }
        }
        students
    }
}
