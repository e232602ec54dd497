use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    allergen::entities::Severity,
    common::{entities::app_errors::CoreError, parse_iso_date},
};

/// One calendar day in the journal. The `date` (`YYYY-MM-DD`) is the key.
///
/// The date is kept as written so a malformed value survives storage; the
/// aggregator skips entries whose date does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JournalEntry {
    pub date: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub reactions: Option<Reaction>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub time: String,
    pub name: String,
    pub items: String,
    #[serde(default)]
    pub reactions: Option<Reaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reaction {
    pub severity: Severity,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl JournalEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            meals: Vec::new(),
            reactions: None,
            notes: String::new(),
        }
    }

    pub fn parsed_date(&self) -> Result<NaiveDate, CoreError> {
        parse_iso_date(&self.date)
    }

    pub fn with_meal(mut self, meal: Meal) -> Self {
        self.meals.push(meal);
        self
    }

    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions = Some(reaction);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Meal {
    pub fn new(time: &str, name: &str, items: &str) -> Self {
        Self {
            time: time.to_string(),
            name: name.to_string(),
            items: items.to_string(),
            reactions: None,
        }
    }

    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions = Some(reaction);
        self
    }
}

impl Reaction {
    pub fn new(severity: Severity, symptoms: &[&str]) -> Self {
        Self {
            severity,
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            duration: None,
            notes: None,
        }
    }

    /// "mild Stomach Pain, Hives", or "mild reaction" without symptoms.
    pub fn describe(&self) -> String {
        if self.symptoms.is_empty() {
            format!("{} reaction", self.severity)
        } else {
            format!("{} {}", self.severity, self.symptoms.join(", "))
        }
    }
}

/// Entries shipped with a fresh data store.
pub fn default_journal_entries() -> Vec<JournalEntry> {
    let mild_stomach = Reaction::new(Severity::Mild, &["Stomach Pain"]);

    vec![
        JournalEntry {
            date: "2025-03-29".to_string(),
            meals: vec![Meal::new("07:30", "Breakfast", "Oatmeal with berries")],
            reactions: None,
            notes: "No reactions today".to_string(),
        },
        JournalEntry {
            date: "2025-03-28".to_string(),
            meals: vec![
                Meal::new("08:00", "Breakfast", "Toast with avocado"),
                Meal::new("13:00", "Lunch", "Pasta with tomato sauce")
                    .with_reaction(mild_stomach.clone()),
            ],
            reactions: Some(Reaction {
                duration: Some("1 hour".to_string()),
                notes: Some("Mild stomach discomfort after lunch".to_string()),
                ..mild_stomach
            }),
            notes: "Might be cross-contamination in the pasta sauce".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_with_null_reactions() {
        let entry: JournalEntry = serde_json::from_str(
            r#"{"date":"2025-03-29","meals":[{"time":"07:30","name":"Breakfast","items":"Oatmeal","reactions":null}],"reactions":null,"notes":""}"#,
        )
        .unwrap();

        assert!(entry.reactions.is_none());
        assert_eq!(entry.meals.len(), 1);
        assert_eq!(
            entry.parsed_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 29).unwrap()
        );
    }

    #[test]
    fn test_describe_reaction() {
        let reaction = Reaction::new(Severity::Mild, &["Stomach Pain", "Hives"]);
        assert_eq!(reaction.describe(), "mild Stomach Pain, Hives");
        assert_eq!(
            Reaction::new(Severity::Severe, &[]).describe(),
            "severe reaction"
        );
    }

    #[test]
    fn test_unparsable_date() {
        let entry = JournalEntry {
            date: "yesterday".to_string(),
            ..JournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        };
        assert!(matches!(
            entry.parsed_date(),
            Err(CoreError::UnparsableDate(_))
        ));
    }
}
