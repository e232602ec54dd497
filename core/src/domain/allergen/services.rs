use tracing::info;

use crate::domain::{
    allergen::{
        ports::AllergenAnalysisService,
        value_objects::{AnalysisResult, AnalyzeTextInput, MenuAnalysisResult},
    },
    common::{entities::app_errors::CoreError, services::Service},
    journal::ports::JournalRepository,
    profile::ports::ProfileRepository,
    resource::ports::ResourceRepository,
    settings::ports::SettingsRepository,
};

impl<P, J, RS, ST> AllergenAnalysisService for Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    async fn analyze_ingredients(
        &self,
        input: AnalyzeTextInput,
    ) -> Result<AnalysisResult, CoreError> {
        let allergens = self.profile_repository.get_allergens().await?;
        let result = self.matcher.analyze_text(&input.text, &allergens)?;

        if !result.safe {
            info!(
                "Ingredient list flagged {} allergen(s)",
                result.detected_allergens.len()
            );
        }

        Ok(result)
    }

    async fn analyze_menu(
        &self,
        input: AnalyzeTextInput,
    ) -> Result<MenuAnalysisResult, CoreError> {
        let allergens = self.profile_repository.get_allergens().await?;
        self.matcher.analyze_menu(&input.text, &allergens)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        application::tests::test_service,
        domain::{
            allergen::{
                entities::{AllergenProfileEntry, Severity},
                knowledge::AllergenKnowledgeBase,
                matcher::AllergenMatcher,
            },
            journal::ports::MockJournalRepository,
            profile::ports::{MockProfileRepository, ProfileService},
            resource::ports::MockResourceRepository,
            settings::ports::MockSettingsRepository,
        },
    };

    fn mocked_service(
        allergens: Vec<AllergenProfileEntry>,
    ) -> Service<
        MockProfileRepository,
        MockJournalRepository,
        MockResourceRepository,
        MockSettingsRepository,
    > {
        let mut profile_repository = MockProfileRepository::new();
        profile_repository
            .expect_get_allergens()
            .times(1)
            .returning(move || {
                let allergens = allergens.clone();
                Box::pin(async move { Ok(allergens) })
            });

        Service::new(
            profile_repository,
            MockJournalRepository::new(),
            MockResourceRepository::new(),
            MockSettingsRepository::new(),
            AllergenMatcher::new(Arc::new(AllergenKnowledgeBase::builtin().unwrap())),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn test_analyze_ingredients_uses_profile_allergens() {
        let service = mocked_service(vec![
            AllergenProfileEntry::new("Peanuts", Severity::Severe),
            AllergenProfileEntry::new("Dairy", Severity::Mild),
        ]);

        let result = service
            .analyze_ingredients(AnalyzeTextInput {
                text: "Contains peanut oil and milk".to_string(),
            })
            .await
            .unwrap();

        assert!(!result.safe);
        assert_eq!(result.detected_allergens.len(), 2);
        assert_eq!(result.highest_severity(), Some(Severity::Severe));
    }

    #[tokio::test]
    async fn test_empty_profile_is_always_safe() {
        let service = mocked_service(Vec::new());

        let result = service
            .analyze_ingredients(AnalyzeTextInput {
                text: "peanuts, shrimp, milk, wheat".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            result,
            AnalysisResult {
                safe: true,
                ..AnalysisResult::default()
            }
        );
    }

    #[tokio::test]
    async fn test_menu_follows_profile_changes() {
        let (_dir, service) = test_service().await;
        let menu = AnalyzeTextInput {
            text: "Caesar Salad\nGarlic bread\nShrimp Scampi".to_string(),
        };

        let result = service.analyze_menu(menu.clone()).await.unwrap();
        let names: Vec<&str> = result.risky_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Shrimp Scampi", "Caesar Salad", "Any dishes with bread"]
        );

        service.remove_allergen(1).await.unwrap();
        let result = service.analyze_menu(menu).await.unwrap();
        assert_eq!(result.risky_items.len(), 2);
        assert_eq!(result.risky_items[0].name, "Caesar Salad");
        assert_eq!(result.risky_items[0].severity, Severity::Mild);
        assert_eq!(result.safe_options.len(), 3);
    }
}
