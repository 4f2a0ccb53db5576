/// Favorite pinning for the content-browsing screens
///
/// Two storage strategies exist and are kept as separate types:
///
/// - `FavoriteSet` stores bare identities. The display list is rebuilt from
///   the live catalog every time, so catalog edits show up immediately.
/// - `SnapshotFavorites` stores full copies of the items as they were when
///   pinned. The copies are shown as-is and never re-read from the catalog.
///
/// Both implement `Favorites`, which is what the screens program against.

use serde::{Deserialize, Serialize};

/// Something with a stable identity that can be pinned
pub trait ContentItem: Clone {
    /// The identity used for favorite membership (text, name or title)
    fn identity(&self) -> &str;
}

/// A favorite as stored: either a bare key or a full item copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Identity<T> {
    Key(String),
    Snapshot(T),
}

impl<T: ContentItem> Identity<T> {
    pub fn key(&self) -> &str {
        match self {
            Identity::Key(key) => key,
            Identity::Snapshot(item) => item.identity(),
        }
    }
}

/// Stable partition: favorites first, then the rest, each in catalog order
pub fn rank<T, F>(catalog: &[T], is_favorite: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let (mut pinned, rest): (Vec<T>, Vec<T>) = catalog.iter().cloned().partition(|item| is_favorite(item));
    pinned.extend(rest);
    pinned
}

/// Keep only favorites when `favorites_only` is set, preserving order
pub fn filter<T, F>(ranked: &[T], favorites_only: bool, is_favorite: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    if !favorites_only {
        return ranked.to_vec();
    }
    ranked.iter().filter(|item| is_favorite(item)).cloned().collect()
}

/// Operations shared by both favorite strategies
pub trait Favorites<T: ContentItem> {
    fn contains(&self, identity: &str) -> bool;

    /// Add the item if absent, remove it if present. Returns whether it
    /// is a favorite afterwards.
    fn toggle(&mut self, item: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display order for the full list
    fn rank(&self, catalog: &[T]) -> Vec<T>;

    /// Display list, optionally restricted to favorites
    fn view(&self, catalog: &[T], favorites_only: bool) -> Vec<T> {
        let ranked = self.rank(catalog);
        filter(&ranked, favorites_only, |item| {
            <Self as Favorites<T>>::contains(self, item.identity())
        })
    }
}

/// Identity-only favorites, in the order they were pinned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FavoriteSet {
    keys: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.keys.iter().any(|k| k == identity)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Toggle by identity. The catalog is not consulted, so unknown
    /// identities are simply added.
    pub fn toggle_identity(&mut self, identity: &str) -> bool {
        if let Some(pos) = self.keys.iter().position(|k| k == identity) {
            self.keys.remove(pos);
            false
        } else {
            self.keys.push(identity.to_string());
            true
        }
    }
}

impl From<Vec<String>> for FavoriteSet {
    fn from(keys: Vec<String>) -> Self {
        let mut set = Self::new();
        for key in keys {
            if !set.keys.contains(&key) {
                set.keys.push(key);
            }
        }
        set
    }
}

impl From<FavoriteSet> for Vec<String> {
    fn from(set: FavoriteSet) -> Self {
        set.keys
    }
}

impl<T: ContentItem> Favorites<T> for FavoriteSet {
    fn contains(&self, identity: &str) -> bool {
        FavoriteSet::contains(self, identity)
    }

    fn toggle(&mut self, item: &T) -> bool {
        self.toggle_identity(item.identity())
    }

    fn len(&self) -> usize {
        FavoriteSet::len(self)
    }

    fn rank(&self, catalog: &[T]) -> Vec<T> {
        rank(catalog, |item| FavoriteSet::contains(self, item.identity()))
    }
}

/// Toggle an identity on a copy of `favorites`
pub fn toggle_favorite(favorites: &FavoriteSet, identity: &str) -> FavoriteSet {
    let mut updated = favorites.clone();
    updated.toggle_identity(identity);
    updated
}

/// Snapshot favorites, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotFavorites<T> {
    items: Vec<T>,
}

impl<T> Default for SnapshotFavorites<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for SnapshotFavorites<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: ContentItem> SnapshotFavorites<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle from a resolved identity
    ///
    /// A snapshot is pinned or unpinned as usual. A bare key can only unpin
    /// an existing snapshot, so `None` means there was nothing to act on.
    pub fn toggle_resolved(&mut self, identity: &Identity<T>) -> Option<bool> {
        match identity {
            Identity::Snapshot(item) => Some(self.toggle(item)),
            Identity::Key(key) if self.remove(key) => Some(false),
            Identity::Key(_) => None,
        }
    }

    pub fn snapshots(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, identity: &str) -> Option<&T> {
        self.items.iter().find(|item| item.identity() == identity)
    }

    /// Drop a snapshot by identity, whether or not it is still in the catalog
    pub fn remove(&mut self, identity: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.identity() != identity);
        self.items.len() != before
    }
}

impl<T: ContentItem> Favorites<T> for SnapshotFavorites<T> {
    fn contains(&self, identity: &str) -> bool {
        self.find(identity).is_some()
    }

    fn toggle(&mut self, item: &T) -> bool {
        if self.remove(item.identity()) {
            return false;
        }
        self.items.insert(0, item.clone());
        true
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    /// Snapshots first, then catalog items that are not pinned
    fn rank(&self, catalog: &[T]) -> Vec<T> {
        let mut ranked = self.items.clone();
        ranked.extend(
            catalog
                .iter()
                .filter(|item| !self.contains(item.identity()))
                .cloned(),
        );
        ranked
    }
}
