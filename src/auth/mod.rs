use std::sync::Arc;

use tracing::debug;

use crate::common::{RegistrarError, Result};
use crate::record::{Account, RecordStore, Role};

/// A validated account identity, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub role: Role,
    pub display_name: String,
}

/// Identity provider over the accounts table. Credentials are matched as
/// stored; hashing is out of scope for this engine.
pub struct Authenticator {
    store: Arc<RecordStore>,
}

impl Authenticator {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Validates a username/credential pair against the accounts table.
    /// Returns the matching identity, or None when no account matches.
    pub fn login(&self, username: &str, credential: &str) -> Result<Option<Identity>> {
        let accounts = self.store.load_accounts()?;
        Ok(accounts
            .iter()
            .find(|a| a.username == username && a.credential == credential)
            .map(|a| Identity {
                role: a.role,
                display_name: a.display_name.clone(),
            }))
    }

    /// Like [`login`](Self::login), restricted to accounts with the given
    /// role; the student and lecturer portals each admit only their own.
    pub fn login_as(&self, role: Role, username: &str, credential: &str) -> Result<Option<Identity>> {
        Ok(self
            .login(username, credential)?
            .filter(|identity| identity.role == role))
    }

    /// Creates a new account. The username must not already be taken.
    pub fn create_account(&self, account: &Account) -> Result<()> {
        let accounts = self.store.load_accounts()?;
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(RegistrarError::InvalidInput(format!(
                "username {} is already taken",
                account.username
            )));
        }

        self.store.append_account(account)?;
        debug!(username = %account.username, role = %account.role, "created account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_store() -> (Arc<RecordStore>, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(RecordStore::new(
            dir.path().join("database.csv"),
            dir.path().join("courses.csv"),
        ));
        store
            .save_accounts(&[
                Account::new(Role::Student, "jdoe", "John Doe", "1023", "secret"),
                Account::new(Role::Lecturer, "asmith", "Dr. Smith", "77", "pass"),
            ])
            .unwrap();
        (store, dir)
    }

    #[test]
    fn test_login_success() {
        let (store, _dir) = seeded_store();
        let auth = Authenticator::new(store);

        let identity = auth.login("jdoe", "secret").unwrap().unwrap();
        assert_eq!(identity.role, Role::Student);
        assert_eq!(identity.display_name, "John Doe");
    }

    #[test]
    fn test_login_wrong_credential() {
        let (store, _dir) = seeded_store();
        let auth = Authenticator::new(store);

        assert!(auth.login("jdoe", "wrong").unwrap().is_none());
        assert!(auth.login("nobody", "secret").unwrap().is_none());
    }

    #[test]
    fn test_login_as_filters_role() {
        let (store, _dir) = seeded_store();
        let auth = Authenticator::new(store);

        assert!(auth.login_as(Role::Lecturer, "jdoe", "secret").unwrap().is_none());
        assert!(auth.login_as(Role::Student, "jdoe", "secret").unwrap().is_some());
    }

    #[test]
    fn test_create_account_rejects_taken_username() {
        let (store, _dir) = seeded_store();
        let auth = Authenticator::new(store.clone());

        let duplicate = Account::new(Role::Student, "jdoe", "Other Doe", "9", "x");
        assert!(matches!(
            auth.create_account(&duplicate),
            Err(RegistrarError::InvalidInput(_))
        ));

        let fresh = Account::new(Role::Student, "bwu", "Bob Wu", "2044", "pw");
        auth.create_account(&fresh).unwrap();
        assert!(auth.login("bwu", "pw").unwrap().is_some());
    }
}
