use tracing::warn;

use crate::common::{
    COURSE_FIELD_COUNT, CREDIT_LABEL_SUFFIX, EMPTY_ROSTER, FIELD_DELIMITER, LIST_DELIMITER,
    NO_LECTURER, NO_PREREQUISITES,
};

/// One row of the courses table.
///
/// Credit weight is held as a typed integer and rendered back into the
/// `"<N> Credits"` label only at the store boundary. The wire sentinels
/// (`Nil`, `-`, `no assigned lecturer`) are represented as empty vectors
/// internally and reappear only on serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Credit weight; 0 when the stored label failed to parse
    pub credits: u32,

    /// Course code, unique within the table
    pub code: String,

    /// Direct prerequisite course codes; empty means none
    pub prerequisites: Vec<String>,

    /// Display names of enrolled students; empty means no enrollments
    pub roster: Vec<String>,

    /// Assigned lecturer names; empty means unassigned
    pub lecturers: Vec<String>,
}

impl Course {
    /// Creates a new course with an empty roster and no assigned lecturer.
    pub fn new(code: impl Into<String>, credits: u32, prerequisites: Vec<String>) -> Self {
        Self {
            credits,
            code: code.into(),
            prerequisites,
            roster: Vec::new(),
            lecturers: Vec::new(),
        }
    }

    /// Parses a course from one table row.
    /// Format: `creditLabel,code,prerequisites,enrolledStudents,lecturer`.
    /// Returns None for rows with the wrong field count. An unparsable
    /// credit label yields weight 0 (logged, not propagated).
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != COURSE_FIELD_COUNT {
            return None;
        }

        let credits = parse_credit_label(fields[0]).unwrap_or_else(|| {
            warn!(label = fields[0], "credit label did not parse, treating as 0");
            0
        });

        Some(Self {
            credits,
            code: fields[1].to_string(),
            prerequisites: parse_list(fields[2], NO_PREREQUISITES),
            roster: parse_list(fields[3], EMPTY_ROSTER),
            lecturers: parse_list(fields[4], NO_LECTURER),
        })
    }

    /// Serializes the course back into its row form, reinstating the
    /// credit label and the field sentinels.
    pub fn serialize(&self) -> String {
        format!(
            "{} {},{},{},{},{}",
            self.credits,
            CREDIT_LABEL_SUFFIX,
            self.code,
            serialize_list(&self.prerequisites, NO_PREREQUISITES),
            serialize_list(&self.roster, EMPTY_ROSTER),
            serialize_list(&self.lecturers, NO_LECTURER),
        )
    }

    /// Returns whether the student is on this course's roster.
    /// Membership is exact equality on the display name.
    pub fn is_enrolled(&self, student: &str) -> bool {
        self.roster.iter().any(|name| name == student)
    }

    /// Adds the student to the roster if not already present.
    pub fn enroll(&mut self, student: impl Into<String>) {
        let student = student.into();
        if !self.is_enrolled(&student) {
            self.roster.push(student);
        }
    }

    /// Removes the student from the roster. Returns whether anything was
    /// removed; withdrawing an absent student is a no-op.
    pub fn withdraw(&mut self, student: &str) -> bool {
        let before = self.roster.len();
        self.roster.retain(|name| name != student);
        self.roster.len() != before
    }

    /// Returns whether the given name is among the assigned lecturers.
    /// Lecturer comparison is case-insensitive, as on the read paths.
    pub fn has_lecturer(&self, name: &str) -> bool {
        self.lecturers.iter().any(|l| l.eq_ignore_ascii_case(name))
    }
}

/// Parses a `"<N> Credits"` label. Returns None unless the field is
/// exactly an integer followed by the literal suffix.
pub fn parse_credit_label(label: &str) -> Option<u32> {
    let mut parts = label.split(' ');
    let weight = parts.next()?.parse().ok()?;
    match (parts.next(), parts.next()) {
        (Some(suffix), None) if suffix == CREDIT_LABEL_SUFFIX => Some(weight),
        _ => None,
    }
}

fn parse_list(field: &str, sentinel: &str) -> Vec<String> {
    if field == sentinel || field.is_empty() {
        Vec::new()
    } else {
        field
            .split(LIST_DELIMITER)
            .map(|item| item.trim().to_string())
            .collect()
    }
}

fn serialize_list(items: &[String], sentinel: &str) -> String {
    if items.is_empty() {
        sentinel.to_string()
    } else {
        items.join(&LIST_DELIMITER.to_string())
    }
}

/// The courses table: an optional title row plus course rows kept in
/// ascending credit-weight order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseTable {
    /// Header/title line carried through verbatim, excluded from all
    /// business logic
    title: Option<String>,

    /// Course rows, ascending by credit weight
    courses: Vec<Course>,
}

impl CourseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole table from its line-oriented form.
    ///
    /// The first line is kept as a title row when its first field is not a
    /// well-formed credit label. Later rows with the wrong field count are
    /// skipped (logged), matching the store's leniency toward stored data.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();

        for (index, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let looks_like_course = line
                .split(FIELD_DELIMITER)
                .next()
                .and_then(parse_credit_label)
                .is_some();

            if index == 0 && !looks_like_course {
                table.title = Some(line.to_string());
                continue;
            }

            match Course::parse(line) {
                Some(course) => table.courses.push(course),
                None => warn!(line, "skipping malformed course row"),
            }
        }

        table
    }

    /// Serializes the whole table, title row first.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(title);
            out.push('\n');
        }
        for course in &self.courses {
            out.push_str(&course.serialize());
            out.push('\n');
        }
        out
    }

    /// Returns the title row, if the table has one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Returns the course with the given code, case-insensitive.
    pub fn find(&self, code: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses
            .iter_mut()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Appends a course without re-sorting. Catalog insertions should go
    /// through [`insert_sorted`](Self::insert_sorted) instead.
    pub fn push(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Inserts a course at the first position whose credit weight is
    /// greater than or equal to the new course's weight, preserving the
    /// ascending order. Ties land before the first equal-weight row.
    pub fn insert_sorted(&mut self, course: Course) {
        let index = self
            .courses
            .iter()
            .position(|existing| existing.credits >= course.credits)
            .unwrap_or(self.courses.len());
        self.courses.insert(index, course);
    }

    /// Stable sort ascending by credit weight; equal weights keep their
    /// current relative order.
    pub fn sort_by_credits(&mut self) {
        self.courses.sort_by_key(|c| c.credits);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
