use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Request body for creating a company
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCompanyDto {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub application_type: String,
    pub status: String,
    pub line_of_business_id: i32,
    pub line_of_business: String,
}
