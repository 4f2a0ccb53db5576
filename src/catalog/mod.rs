/// Built-in content catalogs
///
/// The catalogs are fixed at build time and never persisted. Each content
/// kind knows its storage key and which favorite strategy it uses.

pub mod daily;
pub mod items;
pub mod resources;
pub mod worship;

pub use items::*;

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::storage::keys;

/// How a content kind persists its favorites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStrategy {
    /// Bare identities, joined back onto the catalog at display time
    IdentityOnly,
    /// Full item copies taken when pinned
    Snapshot,
}

/// Every content-browsing screen that supports favorites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Dhikr,
    Duas,
    Quran,
    Hadith,
    Salawat,
    Sahabiyat,
    Resources,
}

impl ContentKind {
    pub const ALL: [ContentKind; 7] = [
        ContentKind::Dhikr,
        ContentKind::Duas,
        ContentKind::Quran,
        ContentKind::Hadith,
        ContentKind::Salawat,
        ContentKind::Sahabiyat,
        ContentKind::Resources,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Dhikr => "dhikr",
            ContentKind::Duas => "duas",
            ContentKind::Quran => "quran",
            ContentKind::Hadith => "hadith",
            ContentKind::Salawat => "salawat",
            ContentKind::Sahabiyat => "sahabiyat",
            ContentKind::Resources => "resources",
        }
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            ContentKind::Dhikr => "🕊️ Dhikr",
            ContentKind::Duas => "📿 Du'as",
            ContentKind::Quran => "📖 Qur'anic Verses",
            ContentKind::Hadith => "📜 Hadith",
            ContentKind::Salawat => "🌙 Salawāt",
            ContentKind::Sahabiyat => "🌸 Sahabiyāt Stories",
            ContentKind::Resources => "📚 Resource Center",
        }
    }

    pub fn storage_key(&self) -> &'static str {
        match self {
            ContentKind::Dhikr => keys::FAVORITE_DHIKR,
            ContentKind::Duas => keys::FAVORITE_DUAS,
            ContentKind::Quran => keys::FAVORITE_QURAN,
            ContentKind::Hadith => keys::FAVORITE_HADITH,
            ContentKind::Salawat => keys::FAVORITE_SALAWAT,
            ContentKind::Sahabiyat => keys::FAVORITE_SAHABIYAT,
            ContentKind::Resources => keys::FAVORITE_RESOURCES,
        }
    }

    pub fn strategy(&self) -> FavoriteStrategy {
        match self {
            ContentKind::Salawat => FavoriteStrategy::Snapshot,
            _ => FavoriteStrategy::IdentityOnly,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownContent(format!("no content kind named '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentItem;
    use std::collections::HashSet;

    fn assert_unique<T: ContentItem>(items: &[T]) {
        let identities: HashSet<&str> = items.iter().map(|i| i.identity()).collect();
        assert_eq!(identities.len(), items.len());
    }

    #[test]
    fn test_catalog_identities_are_unique() {
        assert_unique(&worship::dhikr());
        assert_unique(&worship::duas());
        assert_unique(&worship::quran_verses());
        assert_unique(&worship::hadith());
        assert_unique(&worship::salawat());
        assert_unique(&worship::sahabiyat());
        assert_unique(&resources::resources());
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys: HashSet<&str> = ContentKind::ALL.iter().map(|k| k.storage_key()).collect();
        assert_eq!(keys.len(), ContentKind::ALL.len());
    }

    #[test]
    fn test_only_salawat_uses_snapshots() {
        for kind in ContentKind::ALL {
            let expected = if kind == ContentKind::Salawat {
                FavoriteStrategy::Snapshot
            } else {
                FavoriteStrategy::IdentityOnly
            };
            assert_eq!(kind.strategy(), expected, "{}", kind);
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Quran".parse::<ContentKind>().unwrap(), ContentKind::Quran);
        assert!("tafsir".parse::<ContentKind>().is_err());
    }
}
