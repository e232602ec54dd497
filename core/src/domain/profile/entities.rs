use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::allergen::entities::{AllergenProfileEntry, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub allergies: Vec<AllergenProfileEntry>,
    #[serde(default)]
    pub symptoms: Vec<SymptomRecord>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
}

/// A symptom the user experiences and the allergens known to cause it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomRecord {
    pub name: String,
    #[serde(default)]
    pub allergens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Medication {
    pub name: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            allergies: vec![
                AllergenProfileEntry::new("Peanuts", Severity::Severe),
                AllergenProfileEntry::new("Shellfish", Severity::Moderate),
                AllergenProfileEntry::new("Dairy", Severity::Mild),
                AllergenProfileEntry::new("Gluten", Severity::Mild),
            ],
            symptoms: vec![
                SymptomRecord::new("Hives", &["Peanuts", "Shellfish"]),
                SymptomRecord::new("Swelling", &["Peanuts"]),
                SymptomRecord::new("Stomach Pain", &["Dairy", "Gluten"]),
                SymptomRecord::new("Itchy Throat", &["Shellfish"]),
            ],
            medications: vec![
                Medication {
                    name: "Epinephrine Auto-Injector".to_string(),
                    notes: "For severe reactions".to_string(),
                },
                Medication {
                    name: "Antihistamine".to_string(),
                    notes: "For mild allergic reactions".to_string(),
                },
                Medication {
                    name: "Corticosteroid Cream".to_string(),
                    notes: "For skin reactions".to_string(),
                },
            ],
            emergency_contacts: vec![EmergencyContact {
                name: "Dr. Smith".to_string(),
                phone: "555-123-4567".to_string(),
                relation: "Allergist".to_string(),
            }],
        }
    }
}

impl SymptomRecord {
    pub fn new(name: &str, allergens: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            allergens: allergens.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl UserProfile {
    pub fn add_allergen(&mut self, entry: AllergenProfileEntry) {
        self.allergies.push(entry);
    }

    /// Returns `false` when `index` is out of range.
    pub fn update_allergen(&mut self, index: usize, entry: AllergenProfileEntry) -> bool {
        match self.allergies.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    pub fn remove_allergen(&mut self, index: usize) -> Option<AllergenProfileEntry> {
        if index < self.allergies.len() {
            Some(self.allergies.remove(index))
        } else {
            None
        }
    }
}
