use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BasicProjectDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkSurveyTrendDto {
    pub workload: f64,
    pub deadline: f64,
    pub learning: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkSurveyDto {
    /// Survey end date as `DD/MM`.
    pub end_date: String,
    pub workload: f64,
    pub deadline: f64,
    pub learning: f64,
    pub trend: Option<WorkSurveyTrendDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkSurveysDto {
    pub project: BasicProjectDto,
    pub work_surveys: Vec<WorkSurveyDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionItemTrendDto {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionItemReportDto {
    /// Quarter as `Q/YYYY`.
    pub quarter: String,
    pub high: i64,
    pub medium: i64,
    pub low: i64,
    pub trend: Option<ActionItemTrendDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AverageScoreDto {
    /// Quarter as `Q/YYYY`.
    pub quarter: String,
    pub avg: f64,
    pub trend: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EngineeringHealthTrendDto {
    pub delivery: f64,
    pub quality: f64,
    pub collaboration: f64,
    pub feedback: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupEngineeringHealthDto {
    pub quarter: String,
    pub delivery: f64,
    pub quality: f64,
    pub collaboration: f64,
    pub feedback: f64,
    pub trend: Option<EngineeringHealthTrendDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EngineeringHealthDto {
    pub average: Vec<AverageScoreDto>,
    pub groups: Vec<GroupEngineeringHealthDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditTrendDto {
    pub frontend: f64,
    pub backend: f64,
    pub system: f64,
    pub process: f64,
    pub mobile: f64,
    pub blockchain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupAuditDto {
    pub quarter: String,
    pub frontend: f64,
    pub backend: f64,
    pub system: f64,
    pub process: f64,
    pub mobile: f64,
    pub blockchain: f64,
    pub trend: Option<AuditTrendDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditDto {
    pub average: Vec<AverageScoreDto>,
    pub groups: Vec<GroupAuditDto>,
}
