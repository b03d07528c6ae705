use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised by the employee workflows.
///
/// Each variant carries the fixed message returned to the client. Not-found kinds map
/// to 404, every other kind is a validation or conflict error and maps to 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("line manager not found")]
    LineManagerNotFound,
    #[error("referrer not found")]
    ReferrerNotFound,
    #[error("employee cannot refer themselves")]
    CannotSelfReferral,
    #[error("email already exists")]
    EmailExisted,
    #[error("team email already exists")]
    TeamEmailExisted,
    #[error("personal email already exists")]
    PersonalEmailExisted,
    #[error("invalid joined date")]
    InvalidJoinedDate,
    #[error("invalid left date")]
    InvalidLeftDate,
    #[error("left date cannot be before joined date")]
    LeftDateBeforeJoinedDate,
    #[error("could not find discord member in guild")]
    DiscordMemberNotFoundInGuild,
    #[error("discord account already used by another employee")]
    DiscordAccountAlreadyUsedByAnotherEmployee,
    #[error("organization not found")]
    OrganizationNotFound,
    #[error("role not found")]
    RoleNotFound,
    #[error("seniority not found")]
    SeniorityNotFound,
    #[error("position not found")]
    PositionNotFound,
    #[error("stack not found")]
    StackNotFound,
    #[error("chapter not found")]
    ChapterNotFound,
    #[error("country not found")]
    CountryNotFound,
    #[error("city does not belong to country")]
    CityDoesNotBelongToCountry,
    #[error("invalid employee ID")]
    InvalidEmployeeId,
    #[error("invalid value for employee status")]
    InvalidEmployeeStatus,
    #[error("invalid email domain")]
    InvalidEmailDomain,
    #[error("role cannot be empty")]
    RoleCannotBeEmpty,
    #[error("invalid position code")]
    InvalidPositionCode,
    #[error("invalid stack code")]
    InvalidStackCode,
    #[error("invalid chapter code")]
    InvalidChapterCode,
    #[error("invalid seniority code")]
    InvalidSeniorityCode,
    #[error("invalid organization code")]
    InvalidOrganizationCode,
    /// A request field failed a shape check (length, required, range).
    #[error("{0}")]
    InvalidField(String),
}

impl EmployeeError {
    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmployeeNotFound
            | Self::LineManagerNotFound
            | Self::ReferrerNotFound
            | Self::OrganizationNotFound
            | Self::RoleNotFound
            | Self::SeniorityNotFound
            | Self::PositionNotFound
            | Self::StackNotFound
            | Self::ChapterNotFound
            | Self::DiscordMemberNotFoundInGuild => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
