use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetDashboardParams {
    /// Reference day in YYYY-MM-DD format; today when omitted.
    #[schema(example = "2025-03-29")]
    pub as_of: Option<String>,
    /// Number of recent journal days to summarise.
    #[schema(example = 3)]
    pub limit: Option<usize>,
}
