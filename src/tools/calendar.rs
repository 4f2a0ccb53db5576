/// Tools for the period calendar screen
///
/// The calendar works on an in-memory copy of the marked days. Toggling a
/// day only changes that copy; `calendar_save` writes it back wholesale.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{toggle_day, DateKey, DayMark, MarkedDateSet, MonthKey, Palette};
use crate::storage::{keys, KeyValueStore, KeyValueStoreExt, StorageError};
use crate::tools::ToolError;

/// Banner shown above the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Banner {
    /// At least one day is marked
    PrayerExemption,
    /// The user just finished their period
    ResumePrayers,
}

impl Banner {
    pub fn text(&self, user_name: Option<&str>) -> String {
        match self {
            Banner::PrayerExemption => {
                "You are exempt from prayer during menstruation. 💖 Take care and stay spiritually connected."
                    .to_string()
            }
            Banner::ResumePrayers => format!(
                "🌸 It’s time to resume your prayers today, {}. May Allah accept them!",
                user_name.unwrap_or(crate::catalog::daily::FALLBACK_NAME)
            ),
        }
    }
}

/// Load the persisted marked days
///
/// Days whose key or mark no longer parses are logged and skipped so the
/// remaining days survive the next save. A blob that is not an object at
/// all is treated as empty.
pub fn load_marked_dates<S: KeyValueStore + ?Sized>(storage: &S) -> Result<MarkedDateSet, StorageError> {
    let raw: BTreeMap<String, Value> = match storage.load_json(keys::MARKED_DATES) {
        Ok(raw) => raw,
        Err(StorageError::Serialization(e)) => {
            tracing::warn!("Ignoring unreadable marked dates: {}", e);
            return Ok(MarkedDateSet::new());
        }
        Err(e) => return Err(e),
    };

    let marked = raw
        .into_iter()
        .filter_map(|(key, value)| {
            let date = match DateKey::parse(&key) {
                Ok(date) => date,
                Err(e) => {
                    tracing::warn!("Skipping stored marked day: {}", e);
                    return None;
                }
            };
            match serde_json::from_value::<DayMark>(value) {
                Ok(mark) => Some((date, mark)),
                Err(e) => {
                    tracing::warn!("Skipping stored mark for {}: {}", key, e);
                    None
                }
            }
        })
        .collect();
    Ok(marked)
}

/// The calendar screen's working state
#[derive(Debug, Clone, Default)]
pub struct CalendarSession {
    marked: MarkedDateSet,
    palette: Palette,
    show_resume_reminder: bool,
}

impl CalendarSession {
    pub fn new(marked: MarkedDateSet) -> Self {
        Self {
            marked,
            ..Self::default()
        }
    }

    /// Open a session on whatever is persisted
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Result<Self, StorageError> {
        let marked = load_marked_dates(storage)?;
        tracing::debug!("Calendar session opened with {} marked day(s)", marked.len());
        Ok(Self::new(marked))
    }

    pub fn marked(&self) -> &MarkedDateSet {
        &self.marked
    }

    pub fn show_resume_reminder(&self) -> bool {
        self.show_resume_reminder
    }

    /// Toggle one day. Any toggle hides the resume reminder.
    pub fn toggle(&mut self, date: &str) -> Result<bool, ToolError> {
        self.marked = toggle_day(&self.marked, date, &self.palette)?;
        self.show_resume_reminder = false;
        Ok(self.marked.contains(date))
    }

    pub fn finish_period(&mut self) {
        self.show_resume_reminder = true;
    }

    pub fn banner(&self) -> Option<Banner> {
        if self.show_resume_reminder {
            Some(Banner::ResumePrayers)
        } else if !self.marked.is_empty() {
            Some(Banner::PrayerExemption)
        } else {
            None
        }
    }

    /// Write the working copy over the persisted set
    pub fn save<S: KeyValueStore + ?Sized>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save_json(keys::MARKED_DATES, &self.marked)
    }
}

/// Reuse the open session, or load one from storage
pub fn open_session<'a, S: KeyValueStore + ?Sized>(
    storage: &S,
    slot: &'a mut Option<CalendarSession>,
) -> Result<&'a mut CalendarSession, StorageError> {
    let session = match slot.take() {
        Some(session) => session,
        None => CalendarSession::load(storage)?,
    };
    Ok(slot.insert(session))
}

/// One marked day as shown on the calendar
#[derive(Debug, Serialize)]
pub struct MarkedDay {
    pub date: String,
    #[serde(flatten)]
    pub mark: DayMark,
}

/// Parameters for viewing the calendar
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct CalendarViewParams {
    /// Restrict to one month (YYYY-MM, optional - shows every marked day if omitted)
    pub month: Option<String>,
}

/// Response from viewing the calendar
#[derive(Debug, Serialize)]
pub struct CalendarViewResponse {
    pub days: Vec<MarkedDay>,
    pub banner: Option<String>,
    pub show_resume_reminder: bool,
    pub message: String,
}

/// Show the working copy of the calendar
pub fn calendar_view<S: KeyValueStore + ?Sized>(
    storage: &S,
    slot: &mut Option<CalendarSession>,
    params: CalendarViewParams,
) -> Result<CalendarViewResponse, ToolError> {
    let month = params.month.as_deref().map(MonthKey::parse).transpose()?;
    let user_name = crate::tools::user_name(storage)?;
    let session = open_session(storage, slot)?;

    let days: Vec<MarkedDay> = session
        .marked()
        .iter()
        .filter(|(date, _)| month.as_ref().map_or(true, |m| date.month() == *m))
        .map(|(date, mark)| MarkedDay {
            date: date.to_string(),
            mark: mark.clone(),
        })
        .collect();

    let banner = session.banner().map(|b| b.text(user_name.as_deref()));

    let mut lines = Vec::new();
    if let Some(text) = &banner {
        lines.push(text.clone());
    }
    if days.is_empty() {
        lines.push("No days marked.".to_string());
    } else {
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        lines.push(format!("🩸 Marked days ({}): {}", days.len(), dates.join(", ")));
    }

    Ok(CalendarViewResponse {
        days,
        banner,
        show_resume_reminder: session.show_resume_reminder(),
        message: lines.join("\n"),
    })
}

/// Parameters for toggling a calendar day
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ToggleDayParams {
    /// Day to mark or unmark (YYYY-MM-DD)
    pub date: String,
}

/// Response from toggling a calendar day
#[derive(Debug, Serialize)]
pub struct ToggleDayResponse {
    pub date: String,
    pub marked: bool,
    pub marked_count: usize,
    pub message: String,
}

/// Mark or unmark one day in the working copy
pub fn calendar_toggle_day<S: KeyValueStore + ?Sized>(
    storage: &S,
    slot: &mut Option<CalendarSession>,
    params: ToggleDayParams,
) -> Result<ToggleDayResponse, ToolError> {
    // Validate before loading so a bad date never opens a session
    let date = DateKey::parse(params.date.trim())?;
    let session = open_session(storage, slot)?;
    let marked = session.toggle(date.as_str())?;

    tracing::debug!("Toggled {} (marked: {})", date, marked);

    Ok(ToggleDayResponse {
        date: date.to_string(),
        marked,
        marked_count: session.marked().len(),
        message: if marked {
            format!("🩸 Marked {}. Remember to save your dates.", date)
        } else {
            format!("Unmarked {}. Remember to save your dates.", date)
        },
    })
}

/// Response from finishing a period
#[derive(Debug, Serialize)]
pub struct FinishPeriodResponse {
    pub banner: String,
    pub message: String,
}

/// Show the resume-prayers reminder until the next toggle
pub fn calendar_finish_period<S: KeyValueStore + ?Sized>(
    storage: &S,
    slot: &mut Option<CalendarSession>,
) -> Result<FinishPeriodResponse, ToolError> {
    let user_name = crate::tools::user_name(storage)?;
    let session = open_session(storage, slot)?;
    session.finish_period();

    let banner = Banner::ResumePrayers.text(user_name.as_deref());
    Ok(FinishPeriodResponse {
        message: banner.clone(),
        banner,
    })
}

/// Response from saving the calendar
#[derive(Debug, Serialize)]
pub struct SaveCalendarResponse {
    pub success: bool,
    pub saved_days: usize,
    pub message: String,
}

/// Persist the working copy
pub fn calendar_save<S: KeyValueStore + ?Sized>(
    storage: &S,
    slot: &mut Option<CalendarSession>,
) -> Result<SaveCalendarResponse, ToolError> {
    let session = open_session(storage, slot)?;
    session
        .save(storage)
        .map_err(|e| ToolError::not_persisted("your period dates", e))?;

    let saved_days = session.marked().len();
    tracing::info!("Saved {} marked day(s)", saved_days);

    Ok(SaveCalendarResponse {
        success: true,
        saved_days,
        message: "✅ Your period dates have been saved.".to_string(),
    })
}
