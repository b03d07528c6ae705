use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The employee behind the current login session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentEmployeeDto {
    pub id: Uuid,
    pub full_name: String,
    pub display_name: String,
    pub team_email: String,
    pub avatar: String,
    pub roles: Vec<String>,
}
