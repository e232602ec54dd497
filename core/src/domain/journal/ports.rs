use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    journal::{
        entities::JournalEntry,
        value_objects::{Dashboard, GetDashboardInput},
    },
};

/// Persistence of journal entries, keyed by their date string.
#[cfg_attr(test, mockall::automock)]
pub trait JournalRepository: Send + Sync {
    /// All entries in storage order.
    fn get_entries(&self) -> impl Future<Output = Result<Vec<JournalEntry>, CoreError>> + Send;

    fn get_entry_by_date(
        &self,
        date: String,
    ) -> impl Future<Output = Result<Option<JournalEntry>, CoreError>> + Send;

    /// Replaces the entry with the same date, or appends a new one.
    fn upsert_entry(
        &self,
        entry: JournalEntry,
    ) -> impl Future<Output = Result<JournalEntry, CoreError>> + Send;

    fn save_entries(
        &self,
        entries: Vec<JournalEntry>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait JournalService: Send + Sync {
    /// Entries sorted newest-first.
    fn get_entries(&self) -> impl Future<Output = Result<Vec<JournalEntry>, CoreError>> + Send;

    fn get_entry(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<JournalEntry, CoreError>> + Send;

    fn record_entry(
        &self,
        entry: JournalEntry,
    ) -> impl Future<Output = Result<JournalEntry, CoreError>> + Send;

    fn get_dashboard(
        &self,
        input: GetDashboardInput,
    ) -> impl Future<Output = Result<Dashboard, CoreError>> + Send;
}
