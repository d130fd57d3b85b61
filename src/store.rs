//! The account store.
//!
//! [`AccountStore`] holds the ordered account list and writes the entire list
//! back to storage after every mutation. There is no differential write: each
//! save replaces the whole snapshot under [`ACCOUNTS_KEY`].
//!
//! If a save fails, the in-memory list keeps the mutation and the error is
//! returned to the caller. Memory and storage disagree until the next
//! successful save.

use crate::account::Account;
use crate::error::{Error, Result};
use crate::storage::{ACCOUNTS_KEY, KeyValueStorage};

pub struct AccountStore {
    accounts: Vec<Account>,
    storage: Box<dyn KeyValueStorage>,
}

impl AccountStore {
    /// Creates a store with an empty list. Nothing is read until
    /// [`load_accounts`](Self::load_accounts) is called.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            accounts: Vec::new(),
            storage: Box::new(storage),
        }
    }

    /// Current accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// First account with the given id.
    pub fn find(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id == id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Replaces the in-memory list with the stored snapshot.
    ///
    /// Leaves the list as it is when nothing (or an empty string) is stored,
    /// or when the stored value fails to parse.
    pub fn load_accounts(&mut self) -> Result<()> {
        let stored = self.storage.get_item(ACCOUNTS_KEY)?;
        let Some(stored) = stored.filter(|s| !s.is_empty()) else {
            log::debug!("No stored accounts found");
            return Ok(());
        };

        let accounts: Vec<Account> = serde_json::from_str(&stored).map_err(|e| {
            log::error!("Stored accounts are malformed: {}", e);
            Error::MalformedData(e)
        })?;

        log::info!("Loaded {} accounts", accounts.len());
        self.accounts = accounts;
        Ok(())
    }

    /// Writes the whole list to storage, overwriting the previous snapshot.
    pub fn save_accounts(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.accounts).map_err(Error::Serialization)?;
        self.storage.set_item(ACCOUNTS_KEY, &json).inspect_err(|e| {
            log::error!("Failed to save accounts: {}", e);
        })?;
        log::debug!("Saved {} accounts ({} bytes)", self.accounts.len(), json.len());
        Ok(())
    }

    /// Appends the account and saves. Ids are not checked for uniqueness.
    pub fn add_account(&mut self, account: Account) -> Result<()> {
        log::info!("Adding account {}", account.id);
        self.accounts.push(account);
        self.save_accounts()
    }

    /// Replaces the first account with `id` in place and saves.
    ///
    /// Returns `Ok(false)` without touching storage if no account matches.
    pub fn update_account(&mut self, id: &str, account: Account) -> Result<bool> {
        let Some(index) = self.accounts.iter().position(|acc| acc.id == id) else {
            log::debug!("Update skipped, no account {}", id);
            return Ok(false);
        };

        log::info!("Updating account {} at position {}", id, index);
        self.accounts[index] = account;
        self.save_accounts()?;
        Ok(true)
    }

    /// Removes every account with `id` and saves, even if none matched.
    ///
    /// Returns how many accounts were removed.
    pub fn delete_account(&mut self, id: &str) -> Result<usize> {
        let before = self.accounts.len();
        self.accounts.retain(|acc| acc.id != id);
        let removed = before - self.accounts.len();

        log::info!("Deleted {} account(s) with id {}", removed, id);
        self.save_accounts()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Label, RecordType};
    use crate::storage::MemoryStorage;

    fn account(id: &str, login: &str) -> Account {
        Account {
            id: id.to_string(),
            label: vec![Label::new("test")],
            record_type: RecordType::Local,
            login: login.to_string(),
            password: Some("password123".to_string()),
        }
    }

    fn logins(store: &AccountStore) -> Vec<&str> {
        store.accounts().iter().map(|a| a.login.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let storage = MemoryStorage::new();
        let store = AccountStore::new(storage.clone());

        assert!(store.is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_add_appends_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());

        store.add_account(account("1", "first_user")).unwrap();
        store.add_account(account("2", "second_user")).unwrap();
        store.add_account(account("1", "dup_id_user")).unwrap();

        assert_eq!(logins(&store), vec!["first_user", "second_user", "dup_id_user"]);
        assert_eq!(storage.writes(), 3);

        let stored = storage.get_item(ACCOUNTS_KEY).unwrap().unwrap();
        let persisted: Vec<Account> = serde_json::from_str(&stored).unwrap();
        assert_eq!(persisted, store.accounts());
    }

    #[test]
    fn test_update_replaces_first_match_in_place() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        store.add_account(account("a", "alpha_user")).unwrap();
        store.add_account(account("b", "bravo_user")).unwrap();
        store.add_account(account("b", "bravo_again")).unwrap();

        let replaced = store.update_account("b", account("b", "bravo_new")).unwrap();

        assert!(replaced);
        assert_eq!(logins(&store), vec!["alpha_user", "bravo_new", "bravo_again"]);
        assert_eq!(storage.writes(), 4);
    }

    #[test]
    fn test_update_missing_is_silent_noop() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        store.add_account(account("a", "alpha_user")).unwrap();

        let replaced = store.update_account("zzz", account("zzz", "ghost_user")).unwrap();

        assert!(!replaced);
        assert_eq!(logins(&store), vec!["alpha_user"]);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        store.add_account(account("x", "one_user")).unwrap();
        store.add_account(account("y", "two_user")).unwrap();
        store.add_account(account("x", "three_user")).unwrap();

        assert_eq!(store.delete_account("x").unwrap(), 2);
        assert_eq!(logins(&store), vec!["two_user"]);
    }

    #[test]
    fn test_delete_missing_still_persists() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        store.add_account(account("x", "one_user")).unwrap();

        assert_eq!(store.delete_account("nope").unwrap(), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_load_absent_keeps_list() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        store.accounts.push(account("m", "memory_only"));

        store.load_accounts().unwrap();
        assert_eq!(logins(&store), vec!["memory_only"]);
    }

    #[test]
    fn test_load_empty_string_counts_as_absent() {
        let mut storage = MemoryStorage::new();
        storage.set_item(ACCOUNTS_KEY, "").unwrap();

        let mut store = AccountStore::new(storage);
        store.accounts.push(account("m", "memory_only"));

        store.load_accounts().unwrap();
        assert_eq!(logins(&store), vec!["memory_only"]);
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let mut storage = MemoryStorage::new();
        let json = serde_json::to_string(&vec![account("s", "stored_user")]).unwrap();
        storage.set_item(ACCOUNTS_KEY, &json).unwrap();

        let mut store = AccountStore::new(storage);
        store.accounts.push(account("m", "memory_only"));
        store.load_accounts().unwrap();

        assert_eq!(logins(&store), vec!["stored_user"]);
    }

    #[test]
    fn test_load_malformed_fails() {
        let mut storage = MemoryStorage::new();
        storage.set_item(ACCOUNTS_KEY, "{not json").unwrap();

        let mut store = AccountStore::new(storage);
        store.accounts.push(account("m", "memory_only"));

        let err = store.load_accounts().unwrap_err();
        assert!(matches!(err, Error::MalformedData(_)));
        assert_eq!(logins(&store), vec!["memory_only"]);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut store = AccountStore::new(MemoryStorage::new());
        store.add_account(account("d", "first_dup")).unwrap();
        store.add_account(account("d", "second_dup")).unwrap();

        assert_eq!(store.find("d").map(|a| a.login.as_str()), Some("first_dup"));
        assert!(store.find("missing").is_none());
    }
}
