use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for `PUT /api/employees/{id}/general-info`.
///
/// Blank scalar fields leave the stored value unchanged. `lineManagerID` and
/// `referredBy` are always written, so omitting them clears the reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateGeneralInfoDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "lineManagerID")]
    pub line_manager_id: Option<Uuid>,
    pub display_name: String,
    #[serde(rename = "githubID")]
    pub github_id: String,
    #[serde(rename = "notionID")]
    pub notion_id: String,
    pub notion_name: String,
    pub notion_email: String,
    /// Discord username resolved against the guild member list.
    pub discord_name: String,
    pub linked_in_name: String,
    /// `YYYY-MM-DD`
    pub left_date: String,
    /// `YYYY-MM-DD`
    pub joined_date: String,
    #[serde(rename = "organizationIDs")]
    pub organization_ids: Vec<Uuid>,
    pub referred_by: Option<Uuid>,
    #[serde(rename = "wiseRecipientID")]
    pub wise_recipient_id: String,
    pub wise_recipient_email: String,
    pub wise_recipient_name: String,
    pub wise_account_number: String,
    pub wise_currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeDto {
    pub full_name: String,
    pub display_name: String,
    pub team_email: String,
    pub personal_email: String,
    pub positions: Vec<Uuid>,
    pub salary: i64,
    #[serde(rename = "seniorityID")]
    pub seniority_id: Uuid,
    pub roles: Vec<Uuid>,
    pub status: String,
    #[serde(default)]
    pub referred_by: Option<Uuid>,
    /// `YYYY-MM-DD`
    pub joined_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchEmployeesDto {
    pub working_statuses: Vec<String>,
    pub positions: Vec<String>,
    pub stacks: Vec<String>,
    pub chapters: Vec<String>,
    pub seniorities: Vec<String>,
    pub organizations: Vec<String>,
    pub line_managers: Vec<Uuid>,
    pub keyword: String,
    /// Page number starting at 1.
    pub page: Option<u64>,
    /// Page size, 20 when absent.
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonalInfoDto {
    pub dob: NaiveDate,
    pub gender: String,
    #[serde(default)]
    pub place_of_residence: String,
    pub address: String,
    pub personal_email: String,
    /// Country name.
    pub country: String,
    /// City name, must belong to `country`.
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillsDto {
    pub positions: Vec<Uuid>,
    #[serde(default)]
    pub leading_chapters: Vec<Uuid>,
    pub chapters: Vec<Uuid>,
    pub seniority: Uuid,
    pub stacks: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBaseSalaryDto {
    pub contract_amount: i64,
    pub company_account_amount: i64,
    pub personal_account_amount: i64,
    pub currency_code: String,
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    /// Payroll batch, 1 or 15.
    pub batch: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeStatusDto {
    pub employee_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRolesDto {
    pub roles: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasicEmployeeDto {
    pub id: Uuid,
    pub full_name: String,
    pub display_name: String,
    pub avatar: String,
}

/// Code / name pair shared by organizations, positions, stacks, chapters, roles
/// and seniorities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItemDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccountDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(rename = "accountID")]
    pub account_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscordAccountDto {
    pub id: Uuid,
    #[serde(rename = "discordID")]
    pub discord_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseSalaryDto {
    pub id: Uuid,
    #[serde(rename = "employeeID")]
    pub employee_id: Uuid,
    pub contract_amount: i64,
    pub company_account_amount: i64,
    pub personal_account_amount: i64,
    pub currency_code: String,
    pub batch: i32,
    pub effective_date: Option<NaiveDate>,
}

/// Response for the general-info update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfoDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub full_name: String,
    pub display_name: String,
    pub team_email: String,
    pub phone_number: String,
    pub joined_date: Option<NaiveDate>,
    pub left_date: Option<NaiveDate>,
    #[serde(rename = "discordID")]
    pub discord_id: String,
    pub discord_name: String,
    #[serde(rename = "githubID")]
    pub github_id: String,
    #[serde(rename = "notionID")]
    pub notion_id: String,
    pub notion_name: String,
    pub notion_email: String,
    pub linked_in_name: String,
    pub line_manager: Option<BasicEmployeeDto>,
    pub referrer: Option<BasicEmployeeDto>,
    pub organizations: Vec<CatalogItemDto>,
    #[serde(rename = "wiseRecipientID")]
    pub wise_recipient_id: String,
    pub wise_recipient_email: String,
    pub wise_recipient_name: String,
    pub wise_account_number: String,
    pub wise_currency: String,
}

/// Full employee record returned by details, create and the partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub full_name: String,
    pub display_name: String,
    pub team_email: String,
    pub personal_email: String,
    pub phone_number: String,
    pub avatar: String,
    pub gender: String,
    pub address: String,
    pub place_of_residence: String,
    pub date_of_birth: Option<NaiveDate>,
    pub country: String,
    pub city: String,
    pub working_status: String,
    pub joined_date: Option<NaiveDate>,
    pub left_date: Option<NaiveDate>,
    pub line_manager: Option<BasicEmployeeDto>,
    pub referrer: Option<BasicEmployeeDto>,
    pub seniority: Option<CatalogItemDto>,
    pub positions: Vec<CatalogItemDto>,
    pub stacks: Vec<CatalogItemDto>,
    pub chapters: Vec<CatalogItemDto>,
    pub leading_chapters: Vec<CatalogItemDto>,
    pub roles: Vec<CatalogItemDto>,
    pub organizations: Vec<CatalogItemDto>,
    pub social_accounts: Vec<SocialAccountDto>,
    pub discord_account: Option<DiscordAccountDto>,
    pub base_salary: Option<BaseSalaryDto>,
    #[serde(rename = "wiseRecipientID")]
    pub wise_recipient_id: String,
    pub wise_recipient_email: String,
    pub wise_recipient_name: String,
    pub wise_account_number: String,
    pub wise_currency: String,
}

/// Row in the employee search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListItemDto {
    pub id: Uuid,
    pub full_name: String,
    pub display_name: String,
    pub team_email: String,
    pub avatar: String,
    pub working_status: String,
    pub joined_date: Option<NaiveDate>,
    pub line_manager: Option<BasicEmployeeDto>,
    pub seniority: Option<CatalogItemDto>,
    pub positions: Vec<CatalogItemDto>,
    pub stacks: Vec<CatalogItemDto>,
    pub chapters: Vec<CatalogItemDto>,
    pub organizations: Vec<CatalogItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub country: String,
    pub city: String,
}

/// Publicly visible employee card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicEmployeeDto {
    pub id: Uuid,
    pub display_name: String,
    pub avatar: String,
    pub chapters: Vec<CatalogItemDto>,
    pub positions: Vec<CatalogItemDto>,
    pub location: LocationDto,
}
