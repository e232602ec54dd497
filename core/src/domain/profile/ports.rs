use std::future::Future;

use crate::domain::{
    allergen::entities::AllergenProfileEntry,
    common::entities::app_errors::CoreError,
    profile::{
        entities::UserProfile,
        value_objects::{AddAllergenInput, UpdateAllergenInput},
    },
};

/// Persistence of the single user's profile.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn save_profile(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_allergens(
        &self,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;

    fn add_allergen(
        &self,
        entry: AllergenProfileEntry,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;

    /// Fails with `NotFound` when `index` is out of range.
    fn update_allergen(
        &self,
        index: usize,
        entry: AllergenProfileEntry,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;

    /// Fails with `NotFound` when `index` is out of range.
    fn remove_allergen(
        &self,
        index: usize,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;
}

pub trait ProfileService: Send + Sync {
    fn get_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn update_profile(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_allergens(
        &self,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;

    fn add_allergen(
        &self,
        input: AddAllergenInput,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;

    fn update_allergen(
        &self,
        input: UpdateAllergenInput,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;

    fn remove_allergen(
        &self,
        index: usize,
    ) -> impl Future<Output = Result<Vec<AllergenProfileEntry>, CoreError>> + Send;
}
