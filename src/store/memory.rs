//! Mutex-guarded user table.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::store::types::{StoreError, User, UserId};

struct Table {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

/// Thread-safe in-memory store of users.
///
/// Every operation takes the same exclusive lock for the duration of the map
/// access only. Share it between handlers behind an `Arc`.
pub struct UserStore {
    table: Mutex<Table>,
}

impl UserStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                users: HashMap::new(),
                next_id: UserId::first(),
            }),
        }
    }

    /// Insert a new user under the next id.
    pub fn create(&self, name: String) -> User {
        let mut table = self.table.lock().expect("user store mutex poisoned");
        let id = table.next_id;
        table.next_id = id.next();

        let user = User { id, name };
        table.users.insert(id, user.clone());
        tracing::debug!(user_id = %id, "User created");
        user
    }

    pub fn get(&self, id: UserId) -> Result<User, StoreError> {
        let table = self.table.lock().expect("user store mutex poisoned");
        table.users.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Replace the name of an existing user. The id is left untouched.
    pub fn update(&self, id: UserId, name: String) -> Result<User, StoreError> {
        let mut table = self.table.lock().expect("user store mutex poisoned");
        let user = table.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        user.name = name;
        tracing::debug!(user_id = %id, "User updated");
        Ok(user.clone())
    }

    pub fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut table = self.table.lock().expect("user store mutex poisoned");
        table.users.remove(&id).ok_or(StoreError::NotFound(id))?;
        tracing::debug!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Number of live users.
    pub fn len(&self) -> usize {
        self.table.lock().expect("user store mutex poisoned").users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn id(raw: u64) -> UserId {
        UserId::new(raw).unwrap()
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = UserStore::new();
        let a = store.create("Alice".into());
        let b = store.create("Bob".into());

        assert_eq!(a.id, id(1));
        assert_eq!(b.id, id(2));
        assert_eq!(a.name, "Alice");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let store = UserStore::new();
        assert_eq!(store.get(id(1)), Err(StoreError::NotFound(id(1))));
    }

    #[test]
    fn test_update_keeps_id() {
        let store = UserStore::new();
        let created = store.create("Alice".into());

        let updated = store.update(created.id, "Bob".into()).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Bob");
        assert_eq!(store.get(created.id).unwrap().name, "Bob");
    }

    #[test]
    fn test_update_missing() {
        let store = UserStore::new();
        assert_eq!(
            store.update(id(9), "Nobody".into()),
            Err(StoreError::NotFound(id(9)))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_then_get() {
        let store = UserStore::new();
        let user = store.create("Alice".into());

        store.delete(user.id).unwrap();
        assert_eq!(store.get(user.id), Err(StoreError::NotFound(user.id)));
        assert_eq!(store.delete(user.id), Err(StoreError::NotFound(user.id)));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = UserStore::new();
        let first = store.create("a".into());
        store.delete(first.id).unwrap();

        let second = store.create("b".into());
        assert!(second.id > first.id);
    }

    #[test]
    fn test_concurrent_creates_are_unique() {
        let store = Arc::new(UserStore::new());
        let threads: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..250)
                        .map(|i| store.create(format!("user-{t}-{i}")).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in threads {
            let ids = handle.join().unwrap();
            // Each thread observes its own ids in increasing order.
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for id in ids {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }

        assert_eq!(seen.len(), 2000);
        assert_eq!(store.len(), 2000);
    }
}
