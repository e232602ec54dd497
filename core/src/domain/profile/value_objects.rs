use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::allergen::entities::{AllergenProfileEntry, Severity};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddAllergenInput {
    pub name: String,
    pub severity: Severity,
}

#[derive(Debug, Clone)]
pub struct UpdateAllergenInput {
    pub index: usize,
    pub name: String,
    pub severity: Severity,
}

impl From<AddAllergenInput> for AllergenProfileEntry {
    fn from(input: AddAllergenInput) -> Self {
        AllergenProfileEntry::new(input.name.trim(), input.severity)
    }
}

impl From<UpdateAllergenInput> for AllergenProfileEntry {
    fn from(input: UpdateAllergenInput) -> Self {
        AllergenProfileEntry::new(input.name.trim(), input.severity)
    }
}
