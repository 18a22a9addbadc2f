use std::fmt;

use crate::common::{ACCOUNT_FIELD_COUNT, FIELD_DELIMITER};

/// Role of an account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Lecturer,
}

impl Role {
    /// Parses a role from its stored form. Comparison is case-insensitive
    /// on read; the canonical spelling is used on write.
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("Student") {
            Some(Role::Student)
        } else if text.eq_ignore_ascii_case("Lecturer") {
            Some(Role::Lecturer)
        } else {
            None
        }
    }

    /// Returns the canonical stored spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the accounts table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account role
    pub role: Role,

    /// Login name, unique within the table
    pub username: String,

    /// Name shown in rosters and greetings
    pub display_name: String,

    /// Free-form identifier (e.g. a numeric ID)
    pub identifier: String,

    /// Plaintext secret; opaque to the engine
    pub credential: String,
}

impl Account {
    pub fn new(
        role: Role,
        username: impl Into<String>,
        display_name: impl Into<String>,
        identifier: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            role,
            username: username.into(),
            display_name: display_name.into(),
            identifier: identifier.into(),
            credential: credential.into(),
        }
    }

    /// Parses an account from one table row.
    /// Format: `role,username,displayName,identifier,credential`.
    /// Returns None for rows with the wrong field count or an unknown role.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != ACCOUNT_FIELD_COUNT {
            return None;
        }

        let role = Role::parse(fields[0])?;

        Some(Self {
            role,
            username: fields[1].to_string(),
            display_name: fields[2].to_string(),
            identifier: fields[3].to_string(),
            credential: fields[4].to_string(),
        })
    }

    /// Serializes the account back into its row form.
    /// Fields must not contain the delimiter; the format has no escaping.
    pub fn serialize(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.role.as_str(),
            self.username,
            self.display_name,
            self.identifier,
            self.credential
        )
    }
}
