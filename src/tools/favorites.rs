/// Tools for the content-browsing screens
///
/// This module implements the favorites_list and favorite_toggle MCP tools.
/// Favorite sets are loaded on first use and written back on every toggle.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{
    resources, worship, ContentCard, ContentKind, FavoriteStrategy, Presentable, ResourceCategory, Salawat,
};
use crate::domain::{toggle_favorite, DomainError, FavoriteSet, Favorites, Identity, SnapshotFavorites};
use crate::storage::{KeyValueStore, KeyValueStoreExt, StorageError};
use crate::tools::ToolError;

/// Load a favorites array
///
/// Elements that no longer parse are logged and skipped so the rest survive
/// the next write. A value that is not an array at all is treated as empty.
fn load_favorites<S, T, C>(storage: &S, kind: ContentKind) -> Result<C, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
    C: From<Vec<T>>,
{
    let raw: Vec<Value> = match storage.load_json(kind.storage_key()) {
        Ok(raw) => raw,
        Err(StorageError::Serialization(e)) => {
            tracing::warn!("Ignoring unreadable {} favorites: {}", kind, e);
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let items = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping stored {} favorite: {}", kind, e);
                None
            }
        })
        .collect();
    Ok(C::from(items))
}

/// Favorite working copies for every content kind
#[derive(Debug, Default)]
pub struct FavoriteShelf {
    keyed: HashMap<ContentKind, FavoriteSet>,
    salawat: Option<SnapshotFavorites<Salawat>>,
}

impl FavoriteShelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity-only favorites for `kind`, loaded on first access
    pub fn keyed<S: KeyValueStore + ?Sized>(
        &mut self,
        storage: &S,
        kind: ContentKind,
    ) -> Result<&mut FavoriteSet, StorageError> {
        match self.keyed.entry(kind) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let favorites: FavoriteSet = load_favorites::<_, String, _>(storage, kind)?;
                tracing::debug!("Loaded {} {} favorite(s)", favorites.len(), kind);
                Ok(entry.insert(favorites))
            }
        }
    }

    /// Salawat snapshots, loaded on first access
    pub fn salawat<S: KeyValueStore + ?Sized>(
        &mut self,
        storage: &S,
    ) -> Result<&mut SnapshotFavorites<Salawat>, StorageError> {
        let snapshots = match self.salawat.take() {
            Some(snapshots) => snapshots,
            None => load_favorites::<_, Salawat, _>(storage, ContentKind::Salawat)?,
        };
        Ok(self.salawat.insert(snapshots))
    }
}

fn cards<T, F>(favorites: &F, catalog: &[T], favorites_only: bool) -> Vec<ContentCard>
where
    T: Presentable,
    F: Favorites<T>,
{
    favorites
        .view(catalog, favorites_only)
        .iter()
        .map(|item| item.card(favorites.contains(item.identity())))
        .collect()
}

/// Cards for an identity-only kind, joined against its live catalog
fn catalog_cards(
    kind: ContentKind,
    favorites: &FavoriteSet,
    category: Option<ResourceCategory>,
    only: bool,
) -> Vec<ContentCard> {
    match kind {
        ContentKind::Dhikr => cards(favorites, &worship::dhikr(), only),
        ContentKind::Duas => cards(favorites, &worship::duas(), only),
        ContentKind::Quran => cards(favorites, &worship::quran_verses(), only),
        ContentKind::Hadith => cards(favorites, &worship::hadith(), only),
        ContentKind::Salawat => cards(favorites, &worship::salawat(), only),
        ContentKind::Sahabiyat => cards(favorites, &worship::sahabiyat(), only),
        ContentKind::Resources => {
            let catalog = resources::in_category(&resources::resources(), category);
            cards(favorites, &catalog, only)
        }
    }
}

/// Resolve a requested salawat name against the catalog
fn resolve_salawat(name: &str) -> Identity<Salawat> {
    worship::salawat()
        .into_iter()
        .find(|s| s.name == name)
        .map(Identity::Snapshot)
        .unwrap_or_else(|| Identity::Key(name.to_string()))
}

/// `all` or a missing category means no filter
fn parse_category(category: Option<&str>) -> Result<Option<ResourceCategory>, DomainError> {
    let wanted = match category.map(|c| c.trim().to_ascii_lowercase()) {
        None => return Ok(None),
        Some(c) if c.is_empty() || c == "all" => return Ok(None),
        Some(c) => c,
    };

    ResourceCategory::ALL
        .iter()
        .copied()
        .find(|c| c.as_str() == wanted)
        .map(Some)
        .ok_or_else(|| DomainError::InvalidInput {
            message: format!("Unknown resource category '{}'. Use all, physical, mental or spiritual", wanted),
        })
}

/// Parameters for listing one content screen
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FavoritesListParams {
    /// Content kind: dhikr, duas, quran, hadith, salawat, sahabiyat or resources
    pub kind: ContentKind,
    /// Show only favorites (optional, defaults to false)
    #[serde(default)]
    pub favorites_only: bool,
    /// Resources only: all, physical, mental or spiritual (optional)
    pub category: Option<String>,
}

/// Response from listing a content screen
#[derive(Debug, Serialize)]
pub struct FavoritesListResponse {
    pub kind: ContentKind,
    pub title: String,
    pub items: Vec<ContentCard>,
    pub favorite_count: usize,
    pub message: String,
}

/// Ranked display list for one content kind
pub fn list_favorites<S: KeyValueStore + ?Sized>(
    storage: &S,
    shelf: &mut FavoriteShelf,
    params: FavoritesListParams,
) -> Result<FavoritesListResponse, ToolError> {
    let kind = params.kind;
    let only = params.favorites_only;

    if params.category.is_some() && kind != ContentKind::Resources {
        tracing::debug!("Ignoring category filter for {}", kind);
    }

    let (items, favorite_count) = match kind.strategy() {
        FavoriteStrategy::Snapshot => {
            let snapshots = &*shelf.salawat(storage)?;
            (cards(snapshots, &worship::salawat(), only), snapshots.len())
        }
        FavoriteStrategy::IdentityOnly => {
            let category = match kind {
                ContentKind::Resources => parse_category(params.category.as_deref())?,
                _ => None,
            };
            let favorites = &*shelf.keyed(storage, kind)?;
            (catalog_cards(kind, favorites, category, only), favorites.len())
        }
    };

    let message = if items.is_empty() {
        if only {
            format!("{}\n\nNo favorites yet. Long-press an item to pin it.", kind.title())
        } else {
            format!("{}\n\nNothing to show.", kind.title())
        }
    } else {
        let lines: Vec<String> = items
            .iter()
            .map(|card| format!("{} {}", if card.favorite { "⭐" } else { "•" }, card.heading))
            .collect();
        format!("{}\n\n{}", kind.title(), lines.join("\n"))
    };

    Ok(FavoritesListResponse {
        kind,
        title: kind.title().to_string(),
        items,
        favorite_count,
        message,
    })
}

/// Parameters for pinning or unpinning an item
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FavoriteToggleParams {
    /// Content kind: dhikr, duas, quran, hadith, salawat, sahabiyat or resources
    pub kind: ContentKind,
    /// Item identity: text for dhikr/duas/quran/hadith, name for salawat/sahabiyat, title for resources
    pub identity: String,
}

/// Response from toggling a favorite
#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    pub kind: ContentKind,
    pub identity: String,
    pub favorite: bool,
    pub favorite_count: usize,
    pub message: String,
}

/// Toggle one item and write the kind's favorites back
pub fn toggle_favorite_item<S: KeyValueStore + ?Sized>(
    storage: &S,
    shelf: &mut FavoriteShelf,
    params: FavoriteToggleParams,
) -> Result<FavoriteToggleResponse, ToolError> {
    let kind = params.kind;
    let identity = params.identity;

    let (favorite, favorite_count) = match kind.strategy() {
        FavoriteStrategy::Snapshot => {
            let snapshots = shelf.salawat(storage)?;
            // A snapshot whose item left the catalog can still be unpinned
            let favorite = snapshots
                .toggle_resolved(&resolve_salawat(&identity))
                .ok_or_else(|| DomainError::UnknownContent(format!("no salawat named '{}'", identity)))?;
            storage
                .save_json(kind.storage_key(), &*snapshots)
                .map_err(|e| ToolError::not_persisted("your favorites", e))?;
            (favorite, snapshots.len())
        }
        FavoriteStrategy::IdentityOnly => {
            let favorites = shelf.keyed(storage, kind)?;
            *favorites = toggle_favorite(favorites, &identity);
            storage
                .save_json(kind.storage_key(), &*favorites)
                .map_err(|e| ToolError::not_persisted("your favorites", e))?;
            (favorites.contains(&identity), favorites.len())
        }
    };

    tracing::info!("Toggled {} favorite (now favorite: {})", kind, favorite);

    Ok(FavoriteToggleResponse {
        kind,
        message: if favorite {
            format!("⭐ Added to your {} favorites.", kind)
        } else {
            format!("Removed from your {} favorites.", kind)
        },
        identity,
        favorite,
        favorite_count,
    })
}
