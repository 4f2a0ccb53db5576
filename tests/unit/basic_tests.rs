/// Basic unit tests for the public cycle and favorites API
use cycle_pray_mcp::catalog::{worship, ContentKind, FavoriteStrategy};
use cycle_pray_mcp::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn mark_all(dates: &[&str]) -> MarkedDateSet {
        let palette = Palette::period();
        dates
            .iter()
            .fold(MarkedDateSet::new(), |set, date| toggle_day(&set, date, &palette).unwrap())
    }

    #[test]
    fn test_february_leap_year_scenario() {
        let marked = mark_all(&["2024-02-01", "2024-02-02", "2024-02-03", "2024-02-04", "2024-02-05"]);
        let summary = summarize(&marked);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary.get("2024-02"), Some(5));

        let progress = latest_month_progress(&summary).unwrap();
        assert_eq!(progress.month.as_str(), "2024-02");
        assert_eq!(progress.marked_days, 5);
        assert_eq!(progress.total_days, 29);
    }

    #[test]
    fn test_summary_total_matches_marked_days() {
        let marked = mark_all(&["2023-12-30", "2023-12-31", "2024-01-01", "2024-03-15"]);
        let summary = summarize(&marked);
        assert_eq!(summary.total() as usize, marked.len());
    }

    #[test]
    fn test_latest_month_by_key_order() {
        let summary = summarize_dates(["2023-12-01", "2024-01-01", "2023-12-02"]).unwrap();
        let progress = latest_month_progress(&summary).unwrap();
        assert_eq!(progress.month.as_str(), "2024-01");
        assert_eq!(progress.total_days, 31);

        assert!(latest_month_progress(&MonthlySummary::default()).is_none());
    }

    #[test]
    fn test_malformed_dates_rejected() {
        let palette = Palette::period();
        for bad in ["2024-2-01", "2024-02-30", "not a date", ""] {
            let err = toggle_day(&MarkedDateSet::new(), bad, &palette).unwrap_err();
            assert!(err.is_invalid_input(), "{} should be rejected", bad);
        }
        assert!(summarize_dates(["2024-01-01", "2024/01/02"]).is_err());
    }

    #[test]
    fn test_rank_partition_scenario() {
        let catalog = worship::dhikr();
        let mut favorites = FavoriteSet::new();
        favorites.toggle_identity(&catalog[2].text);

        let ranked = Favorites::<catalog::Remembrance>::rank(&favorites, &catalog);
        assert_eq!(ranked[0], catalog[2]);
        assert_eq!(ranked[1], catalog[0]);
        assert_eq!(ranked[2], catalog[1]);
        assert_eq!(ranked[3], catalog[3]);
        assert_eq!(ranked.len(), catalog.len());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let favorites = FavoriteSet::from(vec!["a".to_string(), "b".to_string()]);
        let twice = toggle_favorite(&toggle_favorite(&favorites, "c"), "c");
        assert_eq!(twice, favorites);
    }

    #[test]
    fn test_content_kinds() {
        assert_eq!(ContentKind::ALL.len(), 7);
        assert_eq!(ContentKind::Salawat.strategy(), FavoriteStrategy::Snapshot);
        assert_eq!("hadith".parse::<ContentKind>().unwrap(), ContentKind::Hadith);
        assert!("nasheed".parse::<ContentKind>().is_err());
    }

    #[tokio::test]
    async fn test_server_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let server = CyclePrayServer::new(temp_file.path().to_path_buf()).await;
        assert!(server.is_ok());
    }

    #[test]
    fn test_storage_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf());
        assert!(storage.is_ok());
    }
}
