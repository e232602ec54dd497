//! Dashboard statistics over journal entries.
//!
//! Every function here is pure. Entries whose `date` does not parse are
//! skipped rather than failing the whole computation.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::domain::{
    allergen::entities::Severity,
    journal::{
        entities::JournalEntry,
        value_objects::{
            DashboardStats, EntryStatus, RecentEntrySummary, SERIES_MONTHS, SeverityTimeSeries,
        },
    },
};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const SYMPTOM_WINDOW_DAYS: u64 = 7;

pub fn compute_stats(entries: &[JournalEntry], as_of: NaiveDate) -> DashboardStats {
    let dated: Vec<(NaiveDate, &JournalEntry)> = dated_entries(entries).collect();

    DashboardStats {
        reaction_free_days: reaction_free_streak(&dated, as_of),
        flagged_foods: flagged_foods(&dated, as_of),
        tracked_meals: tracked_meals(&dated, as_of),
        symptoms_this_week: symptoms_this_week(&dated, as_of),
    }
}

/// Counts leading reaction-free entries in the order given, ignoring entries
/// dated after `as_of`. Callers wanting the current streak sort newest-first
/// (see [`sort_newest_first`]).
fn reaction_free_streak(dated: &[(NaiveDate, &JournalEntry)], as_of: NaiveDate) -> u32 {
    let mut streak = 0;
    for (date, entry) in dated {
        if *date > as_of {
            continue;
        }
        if entry.reactions.is_some() {
            break;
        }
        streak += 1;
    }
    streak
}

fn flagged_foods(dated: &[(NaiveDate, &JournalEntry)], as_of: NaiveDate) -> u32 {
    let Some(yesterday) = as_of.checked_sub_days(Days::new(1)) else {
        return 0;
    };

    dated
        .iter()
        .find(|(date, _)| *date == yesterday)
        .map(|(_, entry)| {
            entry
                .meals
                .iter()
                .filter(|meal| meal.reactions.is_some())
                .count() as u32
        })
        .unwrap_or(0)
}

fn tracked_meals(dated: &[(NaiveDate, &JournalEntry)], as_of: NaiveDate) -> u32 {
    dated
        .iter()
        .filter(|(date, _)| date.year() == as_of.year() && date.month() == as_of.month())
        .map(|(_, entry)| entry.meals.len() as u32)
        .sum()
}

fn symptoms_this_week(dated: &[(NaiveDate, &JournalEntry)], as_of: NaiveDate) -> u32 {
    let week_start = as_of
        .checked_sub_days(Days::new(SYMPTOM_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);

    dated
        .iter()
        .filter(|(date, _)| *date >= week_start && *date <= as_of)
        .filter_map(|(_, entry)| entry.reactions.as_ref())
        .map(|reaction| reaction.symptoms.len() as u32)
        .sum()
}

pub fn compute_severity_time_series(
    entries: &[JournalEntry],
    as_of: NaiveDate,
) -> SeverityTimeSeries {
    let mut series = SeverityTimeSeries {
        months: month_labels(as_of),
        mild: vec![0; SERIES_MONTHS],
        moderate: vec![0; SERIES_MONTHS],
        severe: vec![0; SERIES_MONTHS],
    };

    for (date, entry) in dated_entries(entries) {
        let Some(reaction) = &entry.reactions else {
            continue;
        };

        let diff = month_difference(as_of, date);
        if !(0..SERIES_MONTHS as i32).contains(&diff) {
            continue;
        }

        let index = SERIES_MONTHS - 1 - diff as usize;
        let bucket = match reaction.severity {
            Severity::Mild => &mut series.mild,
            Severity::Moderate => &mut series.moderate,
            Severity::Severe => &mut series.severe,
        };
        bucket[index] += 1;
    }

    series
}

/// Latest `limit` days (newest first) that have at least one meal, summarised
/// from their first meal.
pub fn recent_entries(
    entries: &[JournalEntry],
    as_of: NaiveDate,
    limit: usize,
) -> Vec<RecentEntrySummary> {
    let mut dated: Vec<(NaiveDate, &JournalEntry)> = dated_entries(entries).collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    dated
        .into_iter()
        .take(limit)
        .filter_map(|(date, entry)| {
            let meal = entry.meals.first()?;

            let (status, suffix) = match &meal.reactions {
                None => (EntryStatus::Safe, "no reactions".to_string()),
                Some(reaction) if reaction.severity == Severity::Severe => {
                    (EntryStatus::Alert, reaction.describe())
                }
                Some(reaction) => (EntryStatus::Warning, reaction.describe()),
            };

            Some(RecentEntrySummary {
                date,
                label: relative_label(date, as_of),
                meal_name: meal.name.clone(),
                items: meal.items.clone(),
                time: meal.time.clone(),
                status,
                description: format!("{}, {}", meal.items, suffix),
            })
        })
        .collect()
}

/// Sorts entries newest-first; entries with unparsable dates go last.
pub fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.parsed_date().ok().cmp(&a.parsed_date().ok()));
}

pub fn relative_label(date: NaiveDate, as_of: NaiveDate) -> String {
    if date == as_of {
        "Today".to_string()
    } else if as_of.checked_sub_days(Days::new(1)) == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}

fn month_labels(as_of: NaiveDate) -> Vec<String> {
    let current = as_of.month0() as usize;
    (0..SERIES_MONTHS)
        .rev()
        .map(|back| MONTH_ABBREVIATIONS[(current + 12 - back) % 12].to_string())
        .collect()
}

fn month_difference(as_of: NaiveDate, date: NaiveDate) -> i32 {
    (as_of.year() - date.year()) * 12 + (as_of.month() as i32 - date.month() as i32)
}

fn dated_entries(entries: &[JournalEntry]) -> impl Iterator<Item = (NaiveDate, &JournalEntry)> {
    entries.iter().filter_map(|entry| match entry.parsed_date() {
        Ok(date) => Some((date, entry)),
        Err(e) => {
            debug!("Skipping journal entry: {}", e);
            None
        }
    })
}
