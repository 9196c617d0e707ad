use serde::{Deserialize, Serialize};

/// Entity types mirrored into the search index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SearchKind {
    OrganizationalUnit,
    LineOfBusiness,
    BusinessFunction,
    Application,
    TechnologyStack,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SearchHitDto {
    pub kind: SearchKind,
    pub id: i32,
    pub name: String,
}

/// Query string for the search endpoint
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against entity names, empty matches everything
    #[serde(default)]
    pub query: String,
}
