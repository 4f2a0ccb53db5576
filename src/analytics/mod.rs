/// Analytics engine for the summary and home screens
///
/// Everything here is derived from a `MarkedDateSet` on demand; nothing is
/// persisted. The engine also owns the daily rotation of home-screen content.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::catalog::daily::{self, CARE_TIPS, GREETINGS, JUST_FOR_ME, VERSES, WORSHIP_REMINDERS};
use crate::domain::{latest_month_progress, summarize, MarkedDateSet, MonthProgress};

/// Message shown when nothing has been logged yet
pub const NO_PERIOD_DATA: &str = "No period data logged yet.";

/// One month of the monthly report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLine {
    pub month: String,
    pub days: u32,
    pub label: String,
}

/// Monthly summary as listed on the summary screen
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    /// Oldest month first
    pub months: Vec<MonthLine>,
    pub total_days: u32,
    pub message: String,
}

/// The "missed prayer" ring gauge
#[derive(Debug, Clone, Serialize)]
pub struct RingGauge {
    pub month: String,
    pub marked_days: u32,
    pub total_days: u32,
    /// Filled share of the ring, in `[0, 1]`
    pub fraction: f64,
}

impl From<MonthProgress> for RingGauge {
    fn from(progress: MonthProgress) -> Self {
        Self {
            fraction: progress.fraction(),
            month: progress.month.to_string(),
            marked_days: progress.marked_days,
            total_days: progress.total_days,
        }
    }
}

/// Everything the home screen shows
#[derive(Debug, Clone, Serialize)]
pub struct HomeDashboard {
    pub greeting: String,
    pub verse: String,
    pub care_tip: String,
    pub worship_reminder: String,
    /// `None` renders an empty ring
    pub ring: Option<RingGauge>,
    pub message: String,
}

/// Analytics engine for processing cycle data
pub struct AnalyticsEngine {
    /// Shifts the daily rotation; zero keeps it purely date-driven
    rotation_offset: u64,
}

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self { rotation_offset: 0 }
    }

    pub fn with_rotation_offset(rotation_offset: u64) -> Self {
        Self { rotation_offset }
    }

    /// Build the per-month listing for the summary screen
    pub fn monthly_report(&self, marked: &MarkedDateSet) -> MonthlyReport {
        let summary = summarize(marked);

        let months: Vec<MonthLine> = summary
            .iter()
            .map(|(month, days)| MonthLine {
                month: month.to_string(),
                days,
                label: day_count_label(days),
            })
            .collect();

        let message = if months.is_empty() {
            NO_PERIOD_DATA.to_string()
        } else {
            let lines: Vec<String> = months
                .iter()
                .map(|line| format!("📅 {}: {}", line.month, line.label))
                .collect();
            format!("🗓️ Monthly Period Summary\n\n{}", lines.join("\n"))
        };

        tracing::debug!("Monthly report covers {} month(s)", months.len());

        MonthlyReport {
            total_days: summary.total(),
            months,
            message,
        }
    }

    /// Ring gauge for the latest month with marked days
    pub fn ring_gauge(&self, marked: &MarkedDateSet) -> Option<RingGauge> {
        latest_month_progress(&summarize(marked)).map(RingGauge::from)
    }

    /// Assemble the home screen for `today`
    pub fn home_dashboard(
        &self,
        marked: &MarkedDateSet,
        user_name: Option<&str>,
        today: NaiveDate,
    ) -> HomeDashboard {
        let seed = self.daily_seed(today);
        let ring = self.ring_gauge(marked);

        let greeting = daily::personalize(daily::pick(GREETINGS, seed), user_name);
        let verse = daily::pick(VERSES, seed).to_string();
        let care_tip = daily::pick(CARE_TIPS, seed).to_string();
        let worship_reminder = daily::pick(WORSHIP_REMINDERS, seed).to_string();

        let ring_line = match &ring {
            Some(gauge) => format!(
                "🕌 Missed prayers in {}: {} of {} days ({:.0}%)",
                gauge.month,
                gauge.marked_days,
                gauge.total_days,
                gauge.fraction * 100.0
            ),
            None => "🕌 No missed prayers logged yet.".to_string(),
        };

        let message = format!(
            "{}\n{}\n\n🧴 Self-Care Tip\n{}\n\n🌙 Worship Reminder\n{}\n\n{}",
            greeting, verse, care_tip, worship_reminder, ring_line
        );

        HomeDashboard {
            greeting,
            verse,
            care_tip,
            worship_reminder,
            ring,
            message,
        }
    }

    /// "Just for me" suggestion chosen by `seed`
    pub fn just_for_me(&self, seed: u64) -> &'static str {
        daily::pick(JUST_FOR_ME, seed)
    }

    fn daily_seed(&self, today: NaiveDate) -> u64 {
        u64::from(today.ordinal0()).wrapping_add(self.rotation_offset)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn day_count_label(days: u32) -> String {
    format!("{} day{} logged", days, if days == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{toggle_day, Palette};

    fn marked(dates: &[&str]) -> MarkedDateSet {
        let palette = Palette::period();
        dates.iter().fold(MarkedDateSet::new(), |set, date| {
            toggle_day(&set, date, &palette).unwrap()
        })
    }

    #[test]
    fn test_monthly_report_empty() {
        let engine = AnalyticsEngine::new();
        let report = engine.monthly_report(&MarkedDateSet::new());

        assert!(report.months.is_empty());
        assert_eq!(report.total_days, 0);
        assert_eq!(report.message, NO_PERIOD_DATA);
    }

    #[test]
    fn test_monthly_report_ascending() {
        let engine = AnalyticsEngine::new();
        let report = engine.monthly_report(&marked(&["2024-02-01", "2023-12-30", "2024-02-02"]));

        let months: Vec<&str> = report.months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-02"]);
        assert_eq!(report.months[0].label, "1 day logged");
        assert_eq!(report.months[1].label, "2 days logged");
        assert_eq!(report.total_days, 3);
    }

    #[test]
    fn test_ring_gauge_uses_latest_month() {
        let engine = AnalyticsEngine::new();
        let gauge = engine
            .ring_gauge(&marked(&[
                "2024-02-01",
                "2024-02-02",
                "2024-02-03",
                "2024-02-04",
                "2024-02-05",
                "2023-11-10",
            ]))
            .unwrap();

        assert_eq!(gauge.month, "2024-02");
        assert_eq!(gauge.marked_days, 5);
        assert_eq!(gauge.total_days, 29);
        assert!((gauge.fraction - 5.0 / 29.0).abs() < 1e-9);

        assert!(engine.ring_gauge(&MarkedDateSet::new()).is_none());
    }

    #[test]
    fn test_home_dashboard_is_stable_within_a_day() {
        let engine = AnalyticsEngine::new();
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let first = engine.home_dashboard(&MarkedDateSet::new(), Some("Maryam"), today);
        let second = engine.home_dashboard(&MarkedDateSet::new(), Some("Maryam"), today);

        assert_eq!(first.greeting, second.greeting);
        assert_eq!(first.verse, second.verse);
        assert!(first.ring.is_none());
        assert!(first.message.contains("No missed prayers"));
    }

    #[test]
    fn test_home_dashboard_greets_by_name() {
        let engine = AnalyticsEngine::new();
        let greets_with_name = (0..GREETINGS.len() as u64).any(|offset| {
            let engine = AnalyticsEngine::with_rotation_offset(offset);
            let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            engine
                .home_dashboard(&MarkedDateSet::new(), Some("Maryam"), today)
                .greeting
                .contains("Maryam")
        });
        assert!(greets_with_name);

        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dashboard = engine.home_dashboard(&MarkedDateSet::new(), None, today);
        assert!(!dashboard.greeting.contains("{name}"));
    }

    #[test]
    fn test_just_for_me_rotates() {
        let engine = AnalyticsEngine::new();
        assert_eq!(engine.just_for_me(0), JUST_FOR_ME[0]);
        assert_eq!(engine.just_for_me(1), JUST_FOR_ME[1]);
    }
}
