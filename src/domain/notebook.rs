/// Mood and flow journal
///
/// The notebook screen edits a `NotebookDraft`. Saving turns the draft into
/// an immutable `NotebookEntry` that is prepended to the history.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, EntryId};

/// How the user is feeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feeling {
    Happy,
    Sad,
    Angry,
    Tired,
    Anxious,
    Overwhelmed,
    Excited,
    Content,
    Lonely,
    Motivated,
}

impl Feeling {
    pub const ALL: [Feeling; 10] = [
        Feeling::Happy,
        Feeling::Sad,
        Feeling::Angry,
        Feeling::Tired,
        Feeling::Anxious,
        Feeling::Overwhelmed,
        Feeling::Excited,
        Feeling::Content,
        Feeling::Lonely,
        Feeling::Motivated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feeling::Happy => "Happy",
            Feeling::Sad => "Sad",
            Feeling::Angry => "Angry",
            Feeling::Tired => "Tired",
            Feeling::Anxious => "Anxious",
            Feeling::Overwhelmed => "Overwhelmed",
            Feeling::Excited => "Excited",
            Feeling::Content => "Content",
            Feeling::Lonely => "Lonely",
            Feeling::Motivated => "Motivated",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Feeling::Happy => "😊",
            Feeling::Sad => "😭",
            Feeling::Angry => "😠",
            Feeling::Tired => "🥱",
            Feeling::Anxious => "😟",
            Feeling::Overwhelmed => "😵‍💫",
            Feeling::Excited => "🤩",
            Feeling::Content => "😌",
            Feeling::Lonely => "😔",
            Feeling::Motivated => "💪",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| DomainError::InvalidInput {
                message: format!("unknown feeling '{}'", label),
            })
    }
}

/// Flow intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flow {
    Light,
    Medium,
    Heavy,
}

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Light, Flow::Medium, Flow::Heavy];

    pub fn label(&self) -> &'static str {
        match self {
            Flow::Light => "Light",
            Flow::Medium => "Medium",
            Flow::Heavy => "Heavy",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Flow::Light => "💧",
            Flow::Medium => "💦",
            Flow::Heavy => "🌊",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| DomainError::InvalidInput {
                message: format!("unknown flow '{}'", label),
            })
    }
}

/// Worship intentions the user can set for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intention {
    Reflection,
    Dhikr,
    Dua,
}

impl Intention {
    pub const ALL: [Intention; 3] = [Intention::Reflection, Intention::Dhikr, Intention::Dua];

    pub fn key(&self) -> &'static str {
        match self {
            Intention::Reflection => "reflection",
            Intention::Dhikr => "dhikr",
            Intention::Dua => "dua",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intention::Reflection => "🕊️ Reflection",
            Intention::Dhikr => "🧿 Dhikr",
            Intention::Dua => "🙏 Dua",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.key().eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| DomainError::InvalidInput {
                message: format!("unknown intention '{}'", key),
            })
    }
}

/// Intention flags, serialized as `{ "reflection": bool, "dhikr": bool, "dua": bool }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intentions {
    #[serde(default)]
    pub reflection: bool,
    #[serde(default)]
    pub dhikr: bool,
    #[serde(default)]
    pub dua: bool,
}

impl Intentions {
    pub fn is_set(&self, intention: Intention) -> bool {
        match intention {
            Intention::Reflection => self.reflection,
            Intention::Dhikr => self.dhikr,
            Intention::Dua => self.dua,
        }
    }

    pub fn toggle(&mut self, intention: Intention) {
        let flag = match intention {
            Intention::Reflection => &mut self.reflection,
            Intention::Dhikr => &mut self.dhikr,
            Intention::Dua => &mut self.dua,
        };
        *flag = !*flag;
    }

    /// Intentions that are set, in display order
    pub fn active(&self) -> Vec<Intention> {
        Intention::ALL
            .iter()
            .copied()
            .filter(|i| self.is_set(*i))
            .collect()
    }
}

/// The notebook screen's in-progress selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotebookDraft {
    pub feeling: Option<Feeling>,
    pub flow: Option<Flow>,
    pub note: String,
    pub intentions: Intentions,
}

impl NotebookDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every selection; happens each time the screen gains focus
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Freeze the draft into an entry stamped with `at`
    pub fn to_entry(&self, at: DateTime<Utc>) -> NotebookEntry {
        NotebookEntry {
            id: EntryId::new(),
            date: at,
            feeling: self.feeling,
            flow: self.flow,
            note: self.note.clone(),
            intentions: self.intentions,
        }
    }
}

/// One saved notebook entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookEntry {
    #[serde(default)]
    pub id: EntryId,
    pub date: DateTime<Utc>,
    pub feeling: Option<Feeling>,
    pub flow: Option<Flow>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub intentions: Intentions,
}

impl NotebookEntry {
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

impl fmt::Display for NotebookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "Feeling: {}", self.feeling.map_or("-", |x| x.label()))?;
        writeln!(f, "Flow: {}", self.flow.map_or("-", |x| x.label()))?;
        writeln!(
            f,
            "Note: {}",
            if self.has_note() { self.note.as_str() } else { "No reflection" }
        )?;
        let intentions: Vec<&str> = self.intentions.active().iter().map(|i| i.label()).collect();
        write!(f, "Intentions: {}", intentions.join(", "))
    }
}

/// Saved entries, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotebookHistory {
    entries: Vec<NotebookEntry>,
}

impl NotebookHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: NotebookEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[NotebookEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_draft_reset_clears_everything() {
        let mut draft = NotebookDraft::new();
        draft.feeling = Some(Feeling::Tired);
        draft.flow = Some(Flow::Heavy);
        draft.note = "rest day".to_string();
        draft.intentions.toggle(Intention::Dua);

        draft.reset();
        assert_eq!(draft, NotebookDraft::default());
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut history = NotebookHistory::new();
        let mut draft = NotebookDraft::new();

        draft.note = "first".to_string();
        history.record(draft.to_entry(Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap()));
        draft.note = "second".to_string();
        history.record(draft.to_entry(Utc.with_ymd_and_hms(2024, 2, 2, 8, 0, 0).unwrap()));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].note, "second");
        assert_eq!(history.entries()[1].note, "first");
    }

    #[test]
    fn test_reads_entries_without_ids() {
        let raw = r#"[{"date":"2024-02-01T08:00:00.000Z","feeling":"Happy","flow":null,"note":"","intentions":{"reflection":true,"dhikr":false,"dua":false}}]"#;
        let history: NotebookHistory = serde_json::from_str(raw).unwrap();
        let entry = &history.entries()[0];
        assert_eq!(entry.feeling, Some(Feeling::Happy));
        assert_eq!(entry.flow, None);
        assert_eq!(entry.intentions.active(), vec![Intention::Reflection]);
    }

    #[test]
    fn test_entry_display_fallbacks() {
        let entry = NotebookDraft::new().to_entry(Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap());
        let text = entry.to_string();
        assert!(text.contains("Feeling: -"));
        assert!(text.contains("Flow: -"));
        assert!(text.contains("Note: No reflection"));
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(Feeling::from_label("overwhelmed").unwrap(), Feeling::Overwhelmed);
        assert_eq!(Flow::from_label(" Medium ").unwrap(), Flow::Medium);
        assert_eq!(Intention::from_key("DUA").unwrap(), Intention::Dua);
        assert!(Feeling::from_label("grumpy").is_err());
    }
}
