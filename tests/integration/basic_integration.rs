/// Integration tests driving the screen tools against on-disk storage
use cycle_pray_mcp::catalog::{worship, ContentKind};
use cycle_pray_mcp::tools::{self, FavoriteToggleParams, FavoritesListParams, NotebookUpdateParams, ToggleDayParams};
use cycle_pray_mcp::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_basic_workflow() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let mut server = CyclePrayServer::new(temp_file.path().to_path_buf())
            .await
            .expect("Failed to create server");

        let (storage, analytics, workspace) = server.parts();
        tools::set_user_name(storage, tools::SetNameParams { name: "Maryam".to_string() }).unwrap();

        for date in ["2024-02-01", "2024-02-02", "2024-02-03"] {
            tools::calendar_toggle_day(storage, &mut workspace.calendar, ToggleDayParams { date: date.to_string() })
                .unwrap();
        }
        tools::calendar_save(storage, &mut workspace.calendar).unwrap();

        let summary = tools::cycle_summary(storage, analytics).unwrap();
        assert_eq!(summary.total_days, 3);

        let dashboard = tools::home_dashboard(
            storage,
            analytics,
            tools::HomeDashboardParams {
                date: Some("2024-02-10".to_string()),
                just_for_me_seed: None,
            },
        )
        .unwrap();
        let ring = dashboard.dashboard.ring.unwrap();
        assert_eq!((ring.marked_days, ring.total_days), (3, 29));
    }

    #[tokio::test]
    async fn test_database_persistence() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();
        let name = worship::salawat()[10].name.clone();

        {
            let mut server = CyclePrayServer::new(db_path.clone())
                .await
                .expect("Failed to create first server");
            let (storage, _, workspace) = server.parts();

            tools::toggle_favorite_item(
                storage,
                &mut workspace.favorites,
                FavoriteToggleParams {
                    kind: ContentKind::Salawat,
                    identity: name.clone(),
                },
            )
            .unwrap();

            tools::calendar_toggle_day(storage, &mut workspace.calendar, ToggleDayParams { date: "2024-05-04".to_string() })
                .unwrap();
            // Not saved: the calendar toggle must not survive a restart
        }

        let mut server = CyclePrayServer::new(db_path)
            .await
            .expect("Failed to create second server");
        let (storage, _, workspace) = server.parts();

        let listed = tools::list_favorites(
            storage,
            &mut workspace.favorites,
            FavoritesListParams {
                kind: ContentKind::Salawat,
                favorites_only: true,
                category: None,
            },
        )
        .unwrap();
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].identity, name);

        assert!(tools::load_marked_dates(storage).unwrap().is_empty());
    }

    #[test]
    fn test_notebook_round_trip_on_disk() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("Failed to create storage");
        let mut draft = NotebookDraft::new();

        tools::notebook_update(
            &mut draft,
            NotebookUpdateParams {
                feeling: Some("Content".to_string()),
                flow: Some("Light".to_string()),
                toggle_intention: Some("reflection".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        tools::notebook_save(&storage, &draft).unwrap();

        let history = tools::load_history(&storage).unwrap();
        assert_eq!(history.len(), 1);
        let entry = &history.entries()[0];
        assert_eq!(entry.feeling, Some(Feeling::Content));
        assert!(entry.intentions.reflection);
        assert!(!entry.has_note());
    }

    #[test]
    fn test_storage_interface() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("Failed to create storage");

        let store: &dyn KeyValueStore = &storage;
        store.set("@user_name", "Aisha").unwrap();
        assert_eq!(store.get("@user_name").unwrap().as_deref(), Some("Aisha"));
    }
}
