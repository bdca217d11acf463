//! The shared session.
//!
//! A [`Context`] is the unit of work every manager operates in. Writes
//! made through managers are staged in a transaction that is opened on
//! first use and only becomes durable when [`Context::commit`] is called.
//!
//! ## Natural key claims
//!
//! Checking a natural key for duplicates and staging the new record are
//! two separate steps, and a staged record is invisible to other
//! sessions until it is committed. To keep two sessions from both
//! observing "absent" and staging the same key, managers claim the key
//! before checking it. Claims are shared by all contexts created from
//! the same [`Store`](crate::Store) and are held until the claiming
//! context commits or rolls back.
//!
//! Waiting for a claim is bounded: a claim not granted within the
//! registry's timeout fails with [`StoreError::ClaimConflict`]. Contexts
//! that claim the same keys in opposite order fail instead of waiting on
//! each other.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::time;

use crate::error::{EntityKind, StoreError, StoreResult};

/// How long a context waits for a claim held by another context.
pub const DEFAULT_CLAIM_TIMEOUT: Duration = Duration::from_secs(10);

/// Process-wide registry of natural key locks.
#[derive(Debug)]
pub struct ClaimRegistry {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,

    /// Longest wait for a claim.
    timeout: Duration,
}

/// A unit of work against the database.
pub struct Context {
    /// Handle to the database.
    database: DatabaseConnection,

    /// The transaction holding staged changes.
    staged: RwLock<Option<DatabaseTransaction>>,

    /// Shared natural key locks.
    claims: Arc<ClaimRegistry>,

    /// Natural keys claimed by this context.
    held: Mutex<HashMap<String, OwnedMutexGuard<()>>>,
}

impl ClaimRegistry {
    pub fn new(timeout: Duration) -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    async fn lock_for(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(name.to_owned()).or_default().clone()
    }

    /// Forgets locks that nobody holds or waits for.
    async fn prune(&self) {
        let mut locks = self.locks.lock().await;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
    }
}

impl Default for ClaimRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CLAIM_TIMEOUT)
    }
}

impl Context {
    pub fn new(database: DatabaseConnection, claims: Arc<ClaimRegistry>) -> Self {
        Self {
            database,
            staged: RwLock::new(None),
            claims,
            held: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the transaction holding staged changes.
    ///
    /// A transaction is started if none is open. The returned guard must
    /// not be held across calls that commit or roll back this context.
    pub async fn staged(&self) -> StoreResult<RwLockReadGuard<'_, DatabaseTransaction>> {
        {
            let guard = self.staged.read().await;
            if guard.is_some() {
                return map_staged(guard);
            }
        }

        let mut guard = self.staged.write().await;
        if guard.is_none() {
            tracing::trace!("Beginning transaction");
            *guard = Some(self.database.begin().await?);
        }

        map_staged(RwLockWriteGuard::downgrade(guard))
    }

    /// Claims a natural key until this context commits or rolls back.
    ///
    /// Waits if another context holds the claim, failing with
    /// [`StoreError::ClaimConflict`] once the registry's timeout passes.
    /// Claiming a key this context already holds returns immediately.
    pub async fn claim(&self, kind: EntityKind, key: &str) -> StoreResult<()> {
        let name = format!("{}:{}", kind, key);

        if self.held.lock().await.contains_key(&name) {
            return Ok(());
        }

        let lock = self.claims.lock_for(&name).await;
        let guard = match time::timeout(self.claims.timeout, lock.lock_owned()).await {
            Ok(guard) => guard,
            Err(_) => {
                tracing::warn!("Gave up waiting for claim on {}", name);
                return Err(StoreError::ClaimConflict {
                    kind,
                    key: key.to_owned(),
                });
            }
        };

        tracing::trace!("Claimed {}", name);
        self.held.lock().await.insert(name, guard);

        Ok(())
    }

    /// Persists all staged changes.
    pub async fn commit(&self) -> StoreResult<()> {
        let txn = self.staged.write().await.take();
        let result = match txn {
            Some(txn) => txn.commit().await.map_err(StoreError::database_error),
            None => Ok(()),
        };

        self.release().await;
        result
    }

    /// Discards all staged changes.
    pub async fn rollback(&self) -> StoreResult<()> {
        let txn = self.staged.write().await.take();
        let result = match txn {
            Some(txn) => txn.rollback().await.map_err(StoreError::database_error),
            None => Ok(()),
        };

        self.release().await;
        result
    }

    async fn release(&self) {
        self.held.lock().await.clear();
        self.claims.prune().await;
    }
}

fn map_staged(
    guard: RwLockReadGuard<'_, Option<DatabaseTransaction>>,
) -> StoreResult<RwLockReadGuard<'_, DatabaseTransaction>> {
    RwLockReadGuard::try_map(guard, |txn| txn.as_ref()).map_err(|_| StoreError::SessionClosed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_claims_are_pruned() {
        tokio_test::block_on(async {
            let registry = ClaimRegistry::default();

            let lock = registry.lock_for("Drone:sn-0001").await;
            let guard = lock.clone().lock_owned().await;

            registry.prune().await;
            assert_eq!(1, registry.locks.lock().await.len());

            drop(guard);
            drop(lock);

            registry.prune().await;
            assert!(registry.locks.lock().await.is_empty());
        });
    }

    #[tokio::test]
    async fn test_crossed_claims_fail() {
        let claims = Arc::new(ClaimRegistry::new(Duration::from_millis(100)));
        let a = Context::new(DatabaseConnection::Disconnected, claims.clone());
        let b = Context::new(DatabaseConnection::Disconnected, claims.clone());

        a.claim(EntityKind::Location, "alpha").await.unwrap();
        b.claim(EntityKind::Location, "beta").await.unwrap();

        let (a_result, b_result) = tokio::join!(
            a.claim(EntityKind::Location, "beta"),
            b.claim(EntityKind::Location, "alpha"),
        );
        assert!(matches!(a_result, Err(StoreError::ClaimConflict { .. })));
        assert!(matches!(b_result, Err(StoreError::ClaimConflict { .. })));

        a.rollback().await.unwrap();
        b.claim(EntityKind::Location, "alpha")
            .await
            .expect("Released claim should be granted");
    }

    #[test]
    fn test_same_name_shares_lock() {
        tokio_test::block_on(async {
            let registry = ClaimRegistry::default();

            let a = registry.lock_for("Location:field").await;
            let b = registry.lock_for("Location:field").await;
            let c = registry.lock_for("Location:meadow").await;

            assert!(Arc::ptr_eq(&a, &b));
            assert!(!Arc::ptr_eq(&a, &c));
        });
    }
}
