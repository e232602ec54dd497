use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetSubstitutesParams {
    #[schema(example = "milk")]
    pub ingredient: String,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetRecipesParams {
    #[schema(example = "rice")]
    pub query: Option<String>,
}
