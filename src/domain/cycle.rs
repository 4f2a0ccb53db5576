/// Period day marking and monthly aggregation
///
/// A `MarkedDateSet` is the calendar's working state: one entry per marked
/// day, removed again when the day is toggled off. Everything shown on the
/// summary screen and the home ring gauge is derived from it on demand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DateKey, DomainError, MonthKey, Palette, MARK_TEXT_COLOR};

/// How a marked day is drawn on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMark {
    pub selected: bool,
    pub selected_color: String,
    pub text_color: String,
}

impl DayMark {
    fn with_color(color: &str) -> Self {
        Self {
            selected: true,
            selected_color: color.to_string(),
            text_color: MARK_TEXT_COLOR.to_string(),
        }
    }
}

/// The set of days the user has marked, keyed by date
///
/// Unmarking deletes the key, so every stored mark is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedDateSet {
    days: BTreeMap<DateKey, DayMark>,
}

impl MarkedDateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, date: &str) -> bool {
        self.days.contains_key(date)
    }

    pub fn get(&self, date: &str) -> Option<&DayMark> {
        self.days.get(date)
    }

    /// Marked days in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &DayMark)> {
        self.days.iter()
    }

    /// Mark `date` if it is unmarked, otherwise remove it
    ///
    /// A newly marked day takes its color from the palette based on how
    /// many days were already marked. Returns whether the day is marked
    /// afterwards.
    pub fn toggle(&mut self, date: DateKey, palette: &Palette) -> bool {
        if self.days.remove(date.as_str()).is_some() {
            return false;
        }

        let mark = DayMark::with_color(palette.color_for(self.days.len()));
        self.days.insert(date, mark);
        true
    }
}

impl FromIterator<(DateKey, DayMark)> for MarkedDateSet {
    fn from_iter<I: IntoIterator<Item = (DateKey, DayMark)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// Marked-day counts per `YYYY-MM` month
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySummary {
    months: BTreeMap<MonthKey, u32>,
}

impl MonthlySummary {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn get(&self, month: &str) -> Option<u32> {
        self.months.get(month).copied()
    }

    /// Sum over all months
    pub fn total(&self) -> u32 {
        self.months.values().sum()
    }

    /// Months in ascending order with their counts
    pub fn iter(&self) -> impl Iterator<Item = (&MonthKey, u32)> {
        self.months.iter().map(|(month, count)| (month, *count))
    }

    fn record(&mut self, month: MonthKey) {
        *self.months.entry(month).or_insert(0) += 1;
    }

    /// Greatest month key by string comparison
    fn latest(&self) -> Option<(&MonthKey, u32)> {
        self.months.iter().next_back().map(|(month, count)| (month, *count))
    }
}

impl FromIterator<(MonthKey, u32)> for MonthlySummary {
    fn from_iter<I: IntoIterator<Item = (MonthKey, u32)>>(iter: I) -> Self {
        let mut summary = Self::default();
        for (month, count) in iter {
            *summary.months.entry(month).or_insert(0) += count;
        }
        summary
    }
}

/// Marked days against the length of the most recent month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthProgress {
    pub month: MonthKey,
    pub marked_days: u32,
    pub total_days: u32,
}

impl MonthProgress {
    /// Share of the month marked, in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        (self.marked_days.min(self.total_days) as f64) / (self.total_days as f64)
    }
}

/// Count marked days per month
pub fn summarize(marked: &MarkedDateSet) -> MonthlySummary {
    let mut summary = MonthlySummary::default();
    for (date, _) in marked.iter() {
        summary.record(date.month());
    }
    summary
}

/// Count raw date strings per month, rejecting any malformed date
pub fn summarize_dates<'a, I>(dates: I) -> Result<MonthlySummary, DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut summary = MonthlySummary::default();
    for raw in dates {
        let date = DateKey::parse(raw).map_err(|e| DomainError::InvalidInput {
            message: e.to_string(),
        })?;
        summary.record(date.month());
    }
    Ok(summary)
}

/// Progress for the lexicographically greatest month in the summary
pub fn latest_month_progress(summary: &MonthlySummary) -> Option<MonthProgress> {
    summary.latest().map(|(month, marked_days)| MonthProgress {
        month: month.clone(),
        marked_days,
        total_days: month.days_in_month(),
    })
}

/// Toggle a day on a copy of `marked`
pub fn toggle_day(
    marked: &MarkedDateSet,
    date: &str,
    palette: &Palette,
) -> Result<MarkedDateSet, DomainError> {
    let date = DateKey::parse(date).map_err(|e| DomainError::InvalidInput {
        message: e.to_string(),
    })?;

    let mut updated = marked.clone();
    updated.toggle(date, palette);
    Ok(updated)
}
