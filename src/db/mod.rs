use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::matches::Match;
use crate::models::player::Player;
use crate::models::team::Team;
use crate::models::user::User;

/// Returned by [`Collection::insert_unique`] when the unique key is already
/// taken. Handlers translate this into the same ConflictError their own
/// pre-check would have raised, so callers see one error contract whether the
/// duplicate was caught early or at insert time.
#[derive(Debug, Error)]
#[error("duplicate key: {0}")]
pub struct DuplicateKey(pub String);

/// One keyed record store with document-store semantics: insert with a
/// generated id, lookup by id, lookup by filter.
///
/// Cloning is cheap — clones share the same maps, so the whole thing can live
/// in `AppState` and get cloned into every handler.
///
/// Uniqueness is enforced through a secondary key → id index. The existence
/// check and the insert go through a single `entry()` call on that index,
/// which dashmap serializes per key. Two concurrent inserts of the same email
/// can't both win: one gets the vacant entry, the other sees it occupied.
/// Handler-level pre-checks still run first for friendlier error messages,
/// but they are advisory — this is the check that actually holds.
#[derive(Clone)]
pub struct Collection<T> {
    rows: Arc<DashMap<Uuid, T>>,
    unique: Arc<DashMap<String, Uuid>>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            unique: Arc::new(DashMap::new()),
        }
    }

    /// Inserts a record with no uniqueness constraint (matches).
    /// The closure gets the generated id so the record can carry it.
    pub fn insert_one(&self, make: impl FnOnce(Uuid) -> T) -> Uuid {
        let id = Uuid::new_v4();
        self.rows.insert(id, make(id));
        id
    }

    /// Conditional insert: succeeds only if `key` is not already in the
    /// unique index. Key formats are the caller's business — users key by
    /// email, teams by name, players by "{name}:{team_id}".
    pub fn insert_unique(
        &self,
        key: String,
        make: impl FnOnce(Uuid) -> T,
    ) -> Result<Uuid, DuplicateKey> {
        match self.unique.entry(key) {
            Entry::Occupied(e) => Err(DuplicateKey(e.key().clone())),
            Entry::Vacant(e) => {
                let id = Uuid::new_v4();
                self.rows.insert(id, make(id));
                e.insert(id);
                Ok(id)
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.rows.get(&id).map(|r| r.clone())
    }

    /// `find_one` with a predicate filter. Linear scan — these collections
    /// are small and this mirrors the lookup-by-filter contract of a
    /// document store.
    pub fn find_one(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.iter().find(|r| pred(r.value())).map(|r| r.clone())
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.iter().map(|r| r.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The four collections, bundled. Built once in `main` (or per test) and
/// injected through `AppState` — there are no process-wide store handles.
#[derive(Clone, Default)]
pub struct Database {
    pub users: Collection<User>,
    pub teams: Collection<Team>,
    pub players: Collection<Player>,
    pub matches: Collection<Match>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }
}
