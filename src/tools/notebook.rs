/// Tools for the mood and flow notebook
///
/// The draft lives in memory and is cleared whenever the notebook screen
/// gains focus. Saving reads the history fresh from storage, prepends the
/// new entry and writes everything back.

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{Feeling, Flow, Intention, NotebookDraft, NotebookEntry, NotebookHistory};
use crate::storage::{keys, KeyValueStore, KeyValueStoreExt, StorageError};
use crate::tools::ToolError;

/// Current draft as shown on the notebook screen
#[derive(Debug, Serialize)]
pub struct DraftView {
    pub feeling: Option<Feeling>,
    pub flow: Option<Flow>,
    pub note: String,
    pub intentions: Vec<Intention>,
    pub message: String,
}

impl DraftView {
    fn of(draft: &NotebookDraft, headline: &str) -> Self {
        let intentions = draft.intentions.active();
        let labels: Vec<&str> = intentions.iter().map(|i| i.label()).collect();
        let message = format!(
            "{}\nFeeling: {}\nFlow: {}\nNote: {}\nIntentions: {}",
            headline,
            draft.feeling.map_or("-".to_string(), |f| format!("{} {}", f.emoji(), f.label())),
            draft.flow.map_or("-".to_string(), |f| format!("{} {}", f.emoji(), f.label())),
            if draft.note.is_empty() { "-" } else { draft.note.as_str() },
            if labels.is_empty() { "-".to_string() } else { labels.join(", ") },
        );

        Self {
            feeling: draft.feeling,
            flow: draft.flow,
            note: draft.note.clone(),
            intentions,
            message,
        }
    }
}

/// Clear the draft, as happens when the notebook screen opens
pub fn notebook_focus(draft: &mut NotebookDraft) -> DraftView {
    draft.reset();
    tracing::debug!("Notebook draft reset");
    DraftView::of(draft, "📝 How are you today?")
}

/// Parameters for editing the draft
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NotebookUpdateParams {
    /// One of Happy, Sad, Angry, Tired, Anxious, Overwhelmed, Excited, Content, Lonely, Motivated (optional)
    pub feeling: Option<String>,
    /// One of Light, Medium, Heavy (optional)
    pub flow: Option<String>,
    /// Replaces the reflection note (optional)
    pub note: Option<String>,
    /// Intention to flip: reflection, dhikr or dua (optional)
    pub toggle_intention: Option<String>,
}

/// Apply selections to the draft
///
/// Every field is validated before any of them is applied, so a bad value
/// leaves the draft untouched.
pub fn notebook_update(draft: &mut NotebookDraft, params: NotebookUpdateParams) -> Result<DraftView, ToolError> {
    let feeling = params.feeling.as_deref().map(Feeling::from_label).transpose()?;
    let flow = params.flow.as_deref().map(Flow::from_label).transpose()?;
    let intention = params
        .toggle_intention
        .as_deref()
        .map(Intention::from_key)
        .transpose()?;

    if let Some(feeling) = feeling {
        draft.feeling = Some(feeling);
    }
    if let Some(flow) = flow {
        draft.flow = Some(flow);
    }
    if let Some(note) = params.note {
        draft.note = note;
    }
    if let Some(intention) = intention {
        draft.intentions.toggle(intention);
    }

    Ok(DraftView::of(draft, "📝 Draft updated"))
}

/// Load the saved history, newest first
pub fn load_history<S: KeyValueStore + ?Sized>(storage: &S) -> Result<NotebookHistory, StorageError> {
    storage.load_json(keys::NOTEBOOK_HISTORY)
}

/// Response from saving a notebook entry
#[derive(Debug, Serialize)]
pub struct NotebookSaveResponse {
    pub success: bool,
    pub entry: NotebookEntry,
    pub history_len: usize,
    pub message: String,
}

/// Record the draft as a new history entry
pub fn notebook_save<S: KeyValueStore + ?Sized>(
    storage: &S,
    draft: &NotebookDraft,
) -> Result<NotebookSaveResponse, ToolError> {
    let not_saved = |e| ToolError::not_persisted("your entry", e);

    let mut history = load_history(storage).map_err(not_saved)?;
    let entry = draft.to_entry(Utc::now());
    history.record(entry.clone());

    // Selections are only written once the history holds the entry
    storage.save_json(keys::NOTEBOOK_HISTORY, &history).map_err(not_saved)?;
    storage
        .set(keys::SELECTED_FEELING, draft.feeling.map_or("", |f| f.label()))
        .map_err(not_saved)?;
    storage
        .set(keys::SELECTED_FLOW, draft.flow.map_or("", |f| f.label()))
        .map_err(not_saved)?;
    storage.set(keys::REFLECTION_NOTE, &draft.note).map_err(not_saved)?;

    tracing::info!("Saved notebook entry {} ({} in history)", entry.id, history.len());

    Ok(NotebookSaveResponse {
        success: true,
        entry,
        history_len: history.len(),
        message: "Saved! Your entry has been recorded 💜".to_string(),
    })
}

/// Parameters for listing the history
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NotebookHistoryParams {
    /// Maximum number of entries to return, newest first (optional)
    pub limit: Option<usize>,
}

/// Response from listing the history
#[derive(Debug, Serialize)]
pub struct NotebookHistoryResponse {
    pub entries: Vec<NotebookEntry>,
    pub total: usize,
    pub message: String,
}

/// Saved entries, newest first
pub fn notebook_history<S: KeyValueStore + ?Sized>(
    storage: &S,
    params: NotebookHistoryParams,
) -> Result<NotebookHistoryResponse, ToolError> {
    let history = load_history(storage)?;
    let limit = params.limit.unwrap_or(usize::MAX);
    let entries: Vec<NotebookEntry> = history.entries().iter().take(limit).cloned().collect();

    let message = if entries.is_empty() {
        "No notebook entries yet.".to_string()
    } else {
        let blocks: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        format!("📖 Notebook History\n\n{}", blocks.join("\n\n"))
    };

    Ok(NotebookHistoryResponse {
        total: history.len(),
        entries,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Store whose history writes always fail
    struct HistoryRejecting(MemoryStorage);

    impl KeyValueStore for HistoryRejecting {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == keys::NOTEBOOK_HISTORY {
                return Err(StorageError::Unavailable("history is read-only".to_string()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    fn update(draft: &mut NotebookDraft, params: NotebookUpdateParams) -> DraftView {
        notebook_update(draft, params).unwrap()
    }

    #[test]
    fn test_focus_clears_draft() {
        let mut draft = NotebookDraft::new();
        update(
            &mut draft,
            NotebookUpdateParams {
                feeling: Some("tired".to_string()),
                note: Some("Long day".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(draft.feeling, Some(Feeling::Tired));

        let view = notebook_focus(&mut draft);
        assert_eq!(draft, NotebookDraft::new());
        assert!(view.feeling.is_none());
    }

    #[test]
    fn test_bad_value_leaves_draft_untouched() {
        let mut draft = NotebookDraft::new();
        let err = notebook_update(
            &mut draft,
            NotebookUpdateParams {
                feeling: Some("Happy".to_string()),
                flow: Some("Torrential".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(draft, NotebookDraft::new());
    }

    #[test]
    fn test_save_prepends_and_writes_selections() {
        let storage = MemoryStorage::new();
        let mut draft = NotebookDraft::new();

        update(
            &mut draft,
            NotebookUpdateParams {
                feeling: Some("Happy".to_string()),
                ..Default::default()
            },
        );
        notebook_save(&storage, &draft).unwrap();

        notebook_focus(&mut draft);
        update(
            &mut draft,
            NotebookUpdateParams {
                flow: Some("Heavy".to_string()),
                note: Some("Cramps today".to_string()),
                toggle_intention: Some("dua".to_string()),
                ..Default::default()
            },
        );
        let saved = notebook_save(&storage, &draft).unwrap();
        assert_eq!(saved.history_len, 2);

        assert_eq!(storage.get(keys::SELECTED_FEELING).unwrap().as_deref(), Some(""));
        assert_eq!(storage.get(keys::SELECTED_FLOW).unwrap().as_deref(), Some("Heavy"));
        assert_eq!(storage.get(keys::REFLECTION_NOTE).unwrap().as_deref(), Some("Cramps today"));

        let history = notebook_history(&storage, NotebookHistoryParams::default()).unwrap();
        assert_eq!(history.total, 2);
        assert_eq!(history.entries[0].flow, Some(Flow::Heavy));
        assert!(history.entries[0].intentions.dua);
        assert_eq!(history.entries[1].feeling, Some(Feeling::Happy));
        assert!(history.message.contains("No reflection"));
        assert!(history.message.contains("🙏 Dua"));
    }

    #[test]
    fn test_history_limit_and_empty_state() {
        let storage = MemoryStorage::new();
        let empty = notebook_history(&storage, NotebookHistoryParams::default()).unwrap();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.message, "No notebook entries yet.");

        let draft = NotebookDraft::new();
        notebook_save(&storage, &draft).unwrap();
        notebook_save(&storage, &draft).unwrap();

        let limited = notebook_history(&storage, NotebookHistoryParams { limit: Some(1) }).unwrap();
        assert_eq!(limited.entries.len(), 1);
        assert_eq!(limited.total, 2);
    }

    #[test]
    fn test_save_failure_keeps_draft() {
        let storage = MemoryStorage::new();
        let mut draft = NotebookDraft::new();
        update(
            &mut draft,
            NotebookUpdateParams {
                note: Some("Unsaved".to_string()),
                ..Default::default()
            },
        );

        storage.set_offline(true);
        let err = notebook_save(&storage, &draft).unwrap_err();
        assert!(matches!(err, ToolError::NotPersisted { .. }));
        assert_eq!(draft.note, "Unsaved");
    }

    #[test]
    fn test_failed_history_write_leaves_selections_alone() {
        let storage = HistoryRejecting(MemoryStorage::new());
        let mut draft = NotebookDraft::new();
        update(
            &mut draft,
            NotebookUpdateParams {
                feeling: Some("Tired".to_string()),
                note: Some("Quiet morning".to_string()),
                ..Default::default()
            },
        );

        let err = notebook_save(&storage, &draft).unwrap_err();
        assert!(matches!(err, ToolError::NotPersisted { .. }));
        assert_eq!(storage.get(keys::SELECTED_FEELING).unwrap(), None);
        assert_eq!(storage.get(keys::SELECTED_FLOW).unwrap(), None);
        assert_eq!(storage.get(keys::REFLECTION_NOTE).unwrap(), None);
    }
}
