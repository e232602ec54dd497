use std::sync::Arc;

use allergy_compass_core::application::AllergyCompassService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AllergyCompassService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AllergyCompassService) -> Self {
        Self { args, service }
    }
}
