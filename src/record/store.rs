use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::common::Result;
use crate::record::{Account, Course, CourseTable};

/// RecordStore is responsible for reading and writing the two flat-file
/// tables (accounts and courses). Tables are always loaded and replaced
/// wholesale; a save writes a fresh file and renames it into place, so a
/// later load never observes a partial write.
///
/// The store is deliberately stateless between calls: higher layers go
/// load -> mutate -> save on every mutation instead of caching tables,
/// which keeps the screens that share a store from seeing stale rows.
pub struct RecordStore {
    /// Path to the accounts table
    accounts_path: PathBuf,
    /// Path to the courses table
    courses_path: PathBuf,
    /// Serializes writers within the process
    write_lock: Mutex<()>,
    /// Number of table loads performed
    num_loads: AtomicU32,
    /// Number of table saves performed
    num_saves: AtomicU32,
}

impl RecordStore {
    /// Creates a store over the given table files. The files are not
    /// touched until the first load or save.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(accounts_path: P, courses_path: Q) -> Self {
        Self {
            accounts_path: accounts_path.as_ref().to_path_buf(),
            courses_path: courses_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
            num_loads: AtomicU32::new(0),
            num_saves: AtomicU32::new(0),
        }
    }

    /// Loads the accounts table. Rows that do not parse are skipped.
    pub fn load_accounts(&self) -> Result<Vec<Account>> {
        let text = fs::read_to_string(&self.accounts_path)?;
        self.num_loads.fetch_add(1, Ordering::Relaxed);

        let mut accounts = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            match Account::parse(line) {
                Some(account) => accounts.push(account),
                None => warn!(line, "skipping malformed account row"),
            }
        }
        Ok(accounts)
    }

    /// Replaces the accounts table wholesale.
    pub fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        let mut text = String::new();
        for account in accounts {
            text.push_str(&account.serialize());
            text.push('\n');
        }
        self.write_atomic(&self.accounts_path, &text)
    }

    /// Appends a single account row without rewriting the table.
    pub fn append_account(&self, account: &Account) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.accounts_path)?;
        file.write_all(account.serialize().as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;

        self.num_saves.fetch_add(1, Ordering::Relaxed);
        debug!(username = %account.username, "appended account");
        Ok(())
    }

    /// Loads the courses table and restores the ascending credit-weight
    /// order (the title row, if any, stays put).
    pub fn load_courses(&self) -> Result<CourseTable> {
        let text = fs::read_to_string(&self.courses_path)?;
        self.num_loads.fetch_add(1, Ordering::Relaxed);

        let mut table = CourseTable::parse(&text);
        table.sort_by_credits();
        Ok(table)
    }

    /// Replaces the courses table wholesale.
    pub fn save_courses(&self, table: &CourseTable) -> Result<()> {
        self.write_atomic(&self.courses_path, &table.serialize())
    }

    /// Convenience for seeding a fresh courses table.
    pub fn init_courses(&self, title: &str, courses: Vec<Course>) -> Result<()> {
        let mut table = CourseTable::new();
        table.set_title(title);
        for course in courses {
            table.insert_sorted(course);
        }
        self.save_courses(&table)
    }

    /// Writes the full content to a sibling temp file and renames it over
    /// the target, so loads only ever see complete tables.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let _guard = self.write_lock.lock();

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;

        self.num_saves.fetch_add(1, Ordering::Relaxed);
        debug!(path = %path.display(), bytes = content.len(), "saved table");
        Ok(())
    }

    /// Returns the number of table loads performed.
    pub fn get_num_loads(&self) -> u32 {
        self.num_loads.load(Ordering::Relaxed)
    }

    /// Returns the number of table saves performed.
    pub fn get_num_saves(&self) -> u32 {
        self.num_saves.load(Ordering::Relaxed)
    }

    /// Returns the path to the accounts table.
    pub fn accounts_path(&self) -> &Path {
        &self.accounts_path
    }

    /// Returns the path to the courses table.
    pub fn courses_path(&self) -> &Path {
        &self.courses_path
    }
}
