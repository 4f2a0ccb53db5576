/// Catalog item types
///
/// Each type names the field that acts as its identity. `Presentable`
/// flattens any of them into a `ContentCard` for display.

use serde::{Deserialize, Serialize};

use crate::domain::ContentItem;

/// A card as shown on a content screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentCard {
    pub identity: String,
    pub heading: String,
    pub details: Vec<String>,
    pub favorite: bool,
}

/// Display fields of a catalog item
pub trait Presentable: ContentItem {
    fn heading(&self) -> String;
    fn details(&self) -> Vec<String>;

    fn card(&self, favorite: bool) -> ContentCard {
        ContentCard {
            identity: self.identity().to_string(),
            heading: self.heading(),
            details: self.details(),
            favorite,
        }
    }
}

/// A dhikr phrase or du'a, identified by its translation text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remembrance {
    pub text: String,
    pub arabic: String,
    pub theme: String,
}

impl ContentItem for Remembrance {
    fn identity(&self) -> &str {
        &self.text
    }
}

impl Presentable for Remembrance {
    fn heading(&self) -> String {
        self.text.clone()
    }

    fn details(&self) -> Vec<String> {
        vec![self.arabic.clone(), format!("Type: {}", self.theme)]
    }
}

/// A Qur'an verse or hadith, identified by its translation text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub arabic: String,
    pub reference: String,
}

impl ContentItem for Quote {
    fn identity(&self) -> &str {
        &self.text
    }
}

impl Presentable for Quote {
    fn heading(&self) -> String {
        self.text.clone()
    }

    fn details(&self) -> Vec<String> {
        vec![self.arabic.clone(), format!("({})", self.reference)]
    }
}

/// A salawat, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salawat {
    pub name: String,
    pub arabic: String,
    pub transliteration: String,
    pub meaning: String,
    pub virtue: String,
}

impl ContentItem for Salawat {
    fn identity(&self) -> &str {
        &self.name
    }
}

impl Presentable for Salawat {
    fn heading(&self) -> String {
        format!("✨ {}", self.name)
    }

    fn details(&self) -> Vec<String> {
        vec![
            self.arabic.clone(),
            self.transliteration.clone(),
            self.meaning.clone(),
            self.virtue.clone(),
        ]
    }
}

/// A story of one of the female companions, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionStory {
    pub name: String,
    pub title: String,
    pub story: String,
    pub virtue: String,
}

impl ContentItem for CompanionStory {
    fn identity(&self) -> &str {
        &self.name
    }
}

impl Presentable for CompanionStory {
    fn heading(&self) -> String {
        format!("{} — {}", self.name, self.title)
    }

    fn details(&self) -> Vec<String> {
        vec![self.story.clone(), self.virtue.clone()]
    }
}

/// Wellness area of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Physical,
    Mental,
    Spiritual,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 3] = [
        ResourceCategory::Physical,
        ResourceCategory::Mental,
        ResourceCategory::Spiritual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Physical => "physical",
            ResourceCategory::Mental => "mental",
            ResourceCategory::Spiritual => "spiritual",
        }
    }
}

/// An external reading resource, identified by title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
    pub category: ResourceCategory,
}

impl ContentItem for Resource {
    fn identity(&self) -> &str {
        &self.title
    }
}

impl Presentable for Resource {
    fn heading(&self) -> String {
        self.title.clone()
    }

    fn details(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            format!("{} wellness", self.category.as_str().to_uppercase()),
            self.link.clone(),
        ]
    }
}
