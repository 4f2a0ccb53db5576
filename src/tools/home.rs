/// Tool for the home screen
///
/// This module implements the home_dashboard MCP tool.

use chrono::{NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsEngine, HomeDashboard};
use crate::domain::DateKey;
use crate::storage::KeyValueStore;
use crate::tools::{load_marked_dates, user_name, ToolError};

/// Parameters for the home dashboard
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct HomeDashboardParams {
    /// Day to show content for (YYYY-MM-DD, optional - defaults to today)
    pub date: Option<String>,
    /// Seed for the "Just for me" suggestion (optional - omitted means no suggestion)
    pub just_for_me_seed: Option<u64>,
}

/// Response from the home dashboard
#[derive(Debug, Serialize)]
pub struct HomeDashboardResponse {
    #[serde(flatten)]
    pub dashboard: HomeDashboard,
    pub just_for_me: Option<String>,
}

/// Greeting, daily content and the ring gauge for the saved period days
pub fn home_dashboard<S: KeyValueStore + ?Sized>(
    storage: &S,
    analytics: &AnalyticsEngine,
    params: HomeDashboardParams,
) -> Result<HomeDashboardResponse, ToolError> {
    let today: NaiveDate = match params.date.as_deref() {
        Some(date) => DateKey::parse(date.trim())?.date(),
        None => Utc::now().date_naive(),
    };

    let name = user_name(storage)?;
    let marked = load_marked_dates(storage)?;
    let mut dashboard = analytics.home_dashboard(&marked, name.as_deref(), today);

    let just_for_me = params.just_for_me_seed.map(|seed| analytics.just_for_me(seed).to_string());
    if let Some(pick) = &just_for_me {
        dashboard.message.push_str(&format!("\n\n🎁 Just for You 💌\n{}", pick));
    }

    Ok(HomeDashboardResponse {
        dashboard,
        just_for_me,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::daily::JUST_FOR_ME;
    use crate::storage::{keys, MemoryStorage};

    #[test]
    fn test_dashboard_without_data() {
        let storage = MemoryStorage::new();
        let response = home_dashboard(&storage, &AnalyticsEngine::new(), HomeDashboardParams::default()).unwrap();
        assert!(response.dashboard.ring.is_none());
        assert!(response.just_for_me.is_none());
        assert!(!response.dashboard.greeting.contains("{name}"));
    }

    #[test]
    fn test_dashboard_ring_from_saved_days() {
        let storage = MemoryStorage::new();
        storage
            .set(
                keys::MARKED_DATES,
                r##"{"2023-12-01":{"selected":true,"selectedColor":"#8B5CF6","textColor":"#fff"},
                    "2024-01-02":{"selected":true,"selectedColor":"#A78BFA","textColor":"#fff"}}"##,
            )
            .unwrap();

        let params = HomeDashboardParams {
            date: Some("2024-01-15".to_string()),
            just_for_me_seed: Some(2),
        };
        let response = home_dashboard(&storage, &AnalyticsEngine::new(), params).unwrap();

        let ring = response.dashboard.ring.unwrap();
        assert_eq!(ring.month, "2024-01");
        assert_eq!(ring.marked_days, 1);
        assert_eq!(ring.total_days, 31);
        assert_eq!(response.just_for_me.as_deref(), Some(JUST_FOR_ME[2]));
    }

    #[test]
    fn test_dashboard_rejects_bad_date() {
        let storage = MemoryStorage::new();
        let params = HomeDashboardParams {
            date: Some("15/01/2024".to_string()),
            just_for_me_seed: None,
        };
        let err = home_dashboard(&storage, &AnalyticsEngine::new(), params).unwrap_err();
        assert!(err.is_validation());
    }
}
