use chrono::NaiveDate;
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    journal::{
        aggregator::{
            compute_severity_time_series, compute_stats, recent_entries, sort_newest_first,
        },
        entities::JournalEntry,
        ports::{JournalRepository, JournalService},
        value_objects::{Dashboard, GetDashboardInput},
    },
    profile::ports::ProfileRepository,
    resource::ports::ResourceRepository,
    settings::ports::SettingsRepository,
};

impl<P, J, RS, ST> JournalService for Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    async fn get_entries(&self) -> Result<Vec<JournalEntry>, CoreError> {
        let mut entries = self.journal_repository.get_entries().await?;
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    async fn get_entry(&self, date: NaiveDate) -> Result<JournalEntry, CoreError> {
        self.journal_repository
            .get_entry_by_date(date.format("%Y-%m-%d").to_string())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn record_entry(&self, entry: JournalEntry) -> Result<JournalEntry, CoreError> {
        // Normalizes e.g. " 2025-03-29" so the date key stays unique.
        let date = entry.parsed_date()?;
        let entry = JournalEntry {
            date: date.format("%Y-%m-%d").to_string(),
            ..entry
        };

        let saved = self.journal_repository.upsert_entry(entry).await?;
        info!("Journal entry recorded for {}", saved.date);

        Ok(saved)
    }

    async fn get_dashboard(&self, input: GetDashboardInput) -> Result<Dashboard, CoreError> {
        let mut entries = self.journal_repository.get_entries().await?;
        // The streak counts from the newest entry backwards.
        sort_newest_first(&mut entries);

        Ok(Dashboard {
            as_of: input.as_of,
            stats: compute_stats(&entries, input.as_of),
            severity_series: compute_severity_time_series(&entries, input.as_of),
            recent_entries: recent_entries(&entries, input.as_of, input.recent_limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::tests::test_service,
        domain::{
            allergen::entities::Severity,
            journal::entities::{Meal, Reaction},
        },
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_entries_are_sorted_newest_first() {
        let (_dir, service) = test_service().await;

        service
            .record_entry(JournalEntry::new(date(2025, 3, 30)))
            .await
            .unwrap();
        service
            .record_entry(JournalEntry::new(date(2025, 3, 1)))
            .await
            .unwrap();

        let dates: Vec<String> = service
            .get_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, vec!["2025-03-30", "2025-03-29", "2025-03-28", "2025-03-01"]);
    }

    #[tokio::test]
    async fn test_record_entry_replaces_same_date() {
        let (_dir, service) = test_service().await;

        let replacement = JournalEntry::new(date(2025, 3, 28))
            .with_meal(Meal::new("12:00", "Lunch", "Rice bowl"))
            .with_notes("Replaced");
        service.record_entry(replacement.clone()).await.unwrap();

        let stored = service.get_entry(date(2025, 3, 28)).await.unwrap();
        assert_eq!(stored, replacement);
        assert_eq!(service.get_entries().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_record_entry_rejects_bad_date() {
        let (_dir, service) = test_service().await;

        let mut entry = JournalEntry::new(date(2025, 3, 28));
        entry.date = "28.03.2025".to_string();

        let err = service.record_entry(entry).await.unwrap_err();
        assert!(matches!(err, CoreError::UnparsableDate(_)));
    }

    #[tokio::test]
    async fn test_missing_entry_is_not_found() {
        let (_dir, service) = test_service().await;
        let err = service.get_entry(date(2020, 1, 1)).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_dashboard_sorts_before_counting_streak() {
        let (_dir, service) = test_service().await;

        // Appended after the seeded entries, but newer than both.
        service
            .record_entry(
                JournalEntry::new(date(2025, 3, 31))
                    .with_meal(Meal::new("08:00", "Breakfast", "Granola")),
            )
            .await
            .unwrap();
        service
            .record_entry(
                JournalEntry::new(date(2025, 3, 30)).with_meal(
                    Meal::new("19:00", "Dinner", "Shrimp pasta")
                        .with_reaction(Reaction::new(Severity::Moderate, &["Hives"])),
                ),
            )
            .await
            .unwrap();

        let dashboard = service
            .get_dashboard(GetDashboardInput {
                as_of: date(2025, 3, 31),
                recent_limit: 3,
            })
            .await
            .unwrap();

        // Only the day-level reaction breaks the streak.
        assert_eq!(dashboard.stats.reaction_free_days, 3);
        assert_eq!(dashboard.stats.flagged_foods, 1);
        assert_eq!(dashboard.stats.tracked_meals, 5);
        assert_eq!(dashboard.stats.symptoms_this_week, 1);
        assert_eq!(dashboard.severity_series.mild[5], 1);
        assert_eq!(dashboard.recent_entries.len(), 3);
        assert_eq!(dashboard.recent_entries[0].label, "Today");
    }
}
