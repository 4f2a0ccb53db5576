/// Tool for the monthly period summary
///
/// The summary always reads what was saved, never the calendar's unsaved
/// working copy.

use serde::Serialize;

use crate::analytics::{AnalyticsEngine, MonthLine};
use crate::storage::KeyValueStore;
use crate::tools::{load_marked_dates, ToolError};

/// Response from the summary tool
#[derive(Debug, Serialize)]
pub struct CycleSummaryResponse {
    pub months: Vec<MonthLine>,
    pub total_days: u32,
    pub message: String,
}

/// Per-month counts of the saved period days
pub fn cycle_summary<S: KeyValueStore + ?Sized>(
    storage: &S,
    analytics: &AnalyticsEngine,
) -> Result<CycleSummaryResponse, ToolError> {
    let marked = load_marked_dates(storage)?;
    let report = analytics.monthly_report(&marked);

    Ok(CycleSummaryResponse {
        months: report.months,
        total_days: report.total_days,
        message: report.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::NO_PERIOD_DATA;
    use crate::storage::MemoryStorage;
    use crate::tools::{calendar_save, calendar_toggle_day, ToggleDayParams};

    #[test]
    fn test_summary_empty_state() {
        let storage = MemoryStorage::new();
        let response = cycle_summary(&storage, &AnalyticsEngine::new()).unwrap();
        assert!(response.months.is_empty());
        assert_eq!(response.message, NO_PERIOD_DATA);
    }

    #[test]
    fn test_summary_ignores_unsaved_days() {
        let storage = MemoryStorage::new();
        let analytics = AnalyticsEngine::new();
        let mut slot = None;

        for day in 1..=5 {
            let params = ToggleDayParams { date: format!("2024-02-0{}", day) };
            calendar_toggle_day(&storage, &mut slot, params).unwrap();
        }
        assert!(cycle_summary(&storage, &analytics).unwrap().months.is_empty());

        calendar_save(&storage, &mut slot).unwrap();
        let response = cycle_summary(&storage, &analytics).unwrap();
        assert_eq!(response.months.len(), 1);
        assert_eq!(response.months[0].month, "2024-02");
        assert_eq!(response.months[0].days, 5);
        assert!(response.message.contains("2024-02: 5 days logged"));
    }

    #[test]
    fn test_summary_storage_unavailable() {
        let storage = MemoryStorage::new();
        storage.set_offline(true);
        let err = cycle_summary(&storage, &AnalyticsEngine::new()).unwrap_err();
        assert!(matches!(err, ToolError::Storage(ref e) if e.is_unavailable()));
    }
}
