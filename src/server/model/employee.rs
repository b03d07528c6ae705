//! Employee domain models and operation parameters.
//!
//! Parameter types validate the shape of a request in `from_dto` so the service layer
//! only deals with checks that need the database.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    model::employee::{
        BaseSalaryDto, BasicEmployeeDto, CreateEmployeeDto, EmployeeDto, EmployeeListItemDto,
        GeneralInfoDto, LocationDto, PublicEmployeeDto, SearchEmployeesDto, UpdateBaseSalaryDto,
        UpdateGeneralInfoDto, UpdatePersonalInfoDto, UpdateRolesDto, UpdateSkillsDto,
    },
    server::{
        error::employee::EmployeeError,
        model::{
            catalog::{self, CatalogItem},
            discord::DiscordAccount,
            social_account::{SocialAccount, SocialAccountInput, SocialAccountType},
        },
        util::parse::parse_date,
    },
};

/// Team email domains accepted when creating an employee.
pub const TEAM_EMAIL_DOMAINS: [&str; 2] = ["@d.foundation", "@dwarvesv.com"];

pub const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingStatus {
    OnBoarding,
    Probation,
    FullTime,
    Contractor,
    Left,
}

impl WorkingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnBoarding => "on-boarding",
            Self::Probation => "probation",
            Self::FullTime => "full-time",
            Self::Contractor => "contractor",
            Self::Left => "left",
        }
    }

    /// Parses a status tag.
    ///
    /// # Returns
    /// - `Ok(WorkingStatus)` - Known status
    /// - `Err(EmployeeError::InvalidEmployeeStatus)` - Anything else
    pub fn parse(value: &str) -> Result<Self, EmployeeError> {
        match value {
            "on-boarding" => Ok(Self::OnBoarding),
            "probation" => Ok(Self::Probation),
            "full-time" => Ok(Self::FullTime),
            "contractor" => Ok(Self::Contractor),
            "left" => Ok(Self::Left),
            _ => Err(EmployeeError::InvalidEmployeeStatus),
        }
    }
}

/// Employee row as used by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Uuid,
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
    pub line_manager_id: Option<Uuid>,
    pub referred_by: Option<Uuid>,
    pub seniority_id: Option<Uuid>,
    pub discord_account_id: Option<Uuid>,
    pub wise_recipient_id: String,
    pub wise_account_number: String,
    pub wise_recipient_email: String,
    pub wise_recipient_name: String,
    pub wise_currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Converts an entity model to an employee domain model at the repository boundary.
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            display_name: entity.display_name,
            team_email: entity.team_email,
            personal_email: entity.personal_email,
            phone_number: entity.phone_number,
            avatar: entity.avatar,
            gender: entity.gender,
            address: entity.address,
            place_of_residence: entity.place_of_residence,
            date_of_birth: entity.date_of_birth,
            country: entity.country,
            city: entity.city,
            working_status: entity.working_status,
            joined_date: entity.joined_date,
            left_date: entity.left_date,
            line_manager_id: entity.line_manager_id,
            referred_by: entity.referred_by,
            seniority_id: entity.seniority_id,
            discord_account_id: entity.discord_account_id,
            wise_recipient_id: entity.wise_recipient_id,
            wise_account_number: entity.wise_account_number,
            wise_recipient_email: entity.wise_recipient_email,
            wise_recipient_name: entity.wise_recipient_name,
            wise_currency: entity.wise_currency,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to the compact form used for line managers and referrers.
    pub fn into_basic_dto(self) -> BasicEmployeeDto {
        BasicEmployeeDto {
            id: self.id,
            full_name: self.full_name,
            display_name: self.display_name,
            avatar: self.avatar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSalary {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub contract_amount: i64,
    pub company_account_amount: i64,
    pub personal_account_amount: i64,
    pub currency_code: String,
    pub batch: i32,
    pub effective_date: Option<NaiveDate>,
}

impl BaseSalary {
    pub fn from_entity(entity: entity::base_salary::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            contract_amount: entity.contract_amount,
            company_account_amount: entity.company_account_amount,
            personal_account_amount: entity.personal_account_amount,
            currency_code: entity.currency_code,
            batch: entity.batch,
            effective_date: entity.effective_date,
        }
    }

    pub fn into_dto(self) -> BaseSalaryDto {
        BaseSalaryDto {
            id: self.id,
            employee_id: self.employee_id,
            contract_amount: self.contract_amount,
            company_account_amount: self.company_account_amount,
            personal_account_amount: self.personal_account_amount,
            currency_code: self.currency_code,
            batch: self.batch,
            effective_date: self.effective_date,
        }
    }
}

/// Employee with every association loaded, as returned by details and the updates.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub employee: Employee,
    pub line_manager: Option<Employee>,
    pub referrer: Option<Employee>,
    pub seniority: Option<CatalogItem>,
    pub positions: Vec<CatalogItem>,
    pub stacks: Vec<CatalogItem>,
    pub chapters: Vec<CatalogItem>,
    pub leading_chapters: Vec<CatalogItem>,
    pub roles: Vec<CatalogItem>,
    pub organizations: Vec<CatalogItem>,
    pub social_accounts: Vec<SocialAccount>,
    pub discord_account: Option<DiscordAccount>,
    pub base_salary: Option<BaseSalary>,
}

impl EmployeeDetails {
    fn social_account(&self, account_type: SocialAccountType) -> Option<&SocialAccount> {
        self.social_accounts
            .iter()
            .find(|account| account.account_type == account_type.as_str())
    }

    /// Converts to the general-info response, flattening social and Discord accounts.
    pub fn into_general_info_dto(self) -> GeneralInfoDto {
        let github = self
            .social_account(SocialAccountType::GitHub)
            .cloned();
        let notion = self
            .social_account(SocialAccountType::Notion)
            .cloned();
        let linkedin = self
            .social_account(SocialAccountType::LinkedIn)
            .cloned();
        let (discord_id, discord_name) = self
            .discord_account
            .map(|account| (account.discord_id, account.username))
            .unwrap_or_default();
        let employee = self.employee;

        GeneralInfoDto {
            id: employee.id,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
            full_name: employee.full_name,
            display_name: employee.display_name,
            team_email: employee.team_email,
            phone_number: employee.phone_number,
            joined_date: employee.joined_date,
            left_date: employee.left_date,
            discord_id,
            discord_name,
            github_id: github.map(|a| a.account_id).unwrap_or_default(),
            notion_id: notion.as_ref().map(|a| a.account_id.clone()).unwrap_or_default(),
            notion_name: notion.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            notion_email: notion.map(|a| a.email).unwrap_or_default(),
            linked_in_name: linkedin.map(|a| a.name).unwrap_or_default(),
            line_manager: self.line_manager.map(Employee::into_basic_dto),
            referrer: self.referrer.map(Employee::into_basic_dto),
            organizations: catalog::into_dtos(self.organizations),
            wise_recipient_id: employee.wise_recipient_id,
            wise_recipient_email: employee.wise_recipient_email,
            wise_recipient_name: employee.wise_recipient_name,
            wise_account_number: employee.wise_account_number,
            wise_currency: employee.wise_currency,
        }
    }

    pub fn into_dto(self) -> EmployeeDto {
        let employee = self.employee;

        EmployeeDto {
            id: employee.id,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
            full_name: employee.full_name,
            display_name: employee.display_name,
            team_email: employee.team_email,
            personal_email: employee.personal_email,
            phone_number: employee.phone_number,
            avatar: employee.avatar,
            gender: employee.gender,
            address: employee.address,
            place_of_residence: employee.place_of_residence,
            date_of_birth: employee.date_of_birth,
            country: employee.country,
            city: employee.city,
            working_status: employee.working_status,
            joined_date: employee.joined_date,
            left_date: employee.left_date,
            line_manager: self.line_manager.map(Employee::into_basic_dto),
            referrer: self.referrer.map(Employee::into_basic_dto),
            seniority: self.seniority.map(CatalogItem::into_dto),
            positions: catalog::into_dtos(self.positions),
            stacks: catalog::into_dtos(self.stacks),
            chapters: catalog::into_dtos(self.chapters),
            leading_chapters: catalog::into_dtos(self.leading_chapters),
            roles: catalog::into_dtos(self.roles),
            organizations: catalog::into_dtos(self.organizations),
            social_accounts: self
                .social_accounts
                .into_iter()
                .map(SocialAccount::into_dto)
                .collect(),
            discord_account: self.discord_account.map(DiscordAccount::into_dto),
            base_salary: self.base_salary.map(BaseSalary::into_dto),
            wise_recipient_id: employee.wise_recipient_id,
            wise_recipient_email: employee.wise_recipient_email,
            wise_recipient_name: employee.wise_recipient_name,
            wise_account_number: employee.wise_account_number,
            wise_currency: employee.wise_currency,
        }
    }
}

/// Employee row in search results.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListItem {
    pub employee: Employee,
    pub line_manager: Option<Employee>,
    pub seniority: Option<CatalogItem>,
    pub positions: Vec<CatalogItem>,
    pub stacks: Vec<CatalogItem>,
    pub chapters: Vec<CatalogItem>,
    pub organizations: Vec<CatalogItem>,
}

impl EmployeeListItem {
    pub fn into_dto(self) -> EmployeeListItemDto {
        EmployeeListItemDto {
            id: self.employee.id,
            full_name: self.employee.full_name,
            display_name: self.employee.display_name,
            team_email: self.employee.team_email,
            avatar: self.employee.avatar,
            working_status: self.employee.working_status,
            joined_date: self.employee.joined_date,
            line_manager: self.line_manager.map(Employee::into_basic_dto),
            seniority: self.seniority.map(CatalogItem::into_dto),
            positions: catalog::into_dtos(self.positions),
            stacks: catalog::into_dtos(self.stacks),
            chapters: catalog::into_dtos(self.chapters),
            organizations: catalog::into_dtos(self.organizations),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublicEmployee {
    pub employee: Employee,
    pub chapters: Vec<CatalogItem>,
    pub positions: Vec<CatalogItem>,
}

impl PublicEmployee {
    pub fn into_dto(self) -> PublicEmployeeDto {
        PublicEmployeeDto {
            id: self.employee.id,
            display_name: self.employee.display_name,
            avatar: self.employee.avatar,
            chapters: catalog::into_dtos(self.chapters),
            positions: catalog::into_dtos(self.positions),
            location: LocationDto {
                country: self.employee.country,
                city: self.employee.city,
            },
        }
    }
}

fn require(value: &str, field: &str) -> Result<(), EmployeeError> {
    if value.trim().is_empty() {
        return Err(EmployeeError::InvalidField(format!("{} is required", field)));
    }
    Ok(())
}

fn max_len(value: &str, field: &str, max: usize) -> Result<(), EmployeeError> {
    if value.chars().count() > max {
        return Err(EmployeeError::InvalidField(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Parameters for the general-info update.
///
/// Scalars are kept raw; the service skips blank ones, stores the rest as sent and
/// parses the dates once the employee has been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGeneralInfoParams {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub line_manager_id: Option<Uuid>,
    pub display_name: String,
    pub discord_name: String,
    pub github_id: String,
    pub notion_id: String,
    pub notion_name: String,
    pub notion_email: String,
    pub linked_in_name: String,
    pub joined_date: String,
    pub left_date: String,
    pub organization_ids: Vec<Uuid>,
    pub referred_by: Option<Uuid>,
    pub wise_recipient_id: String,
    pub wise_recipient_email: String,
    pub wise_recipient_name: String,
    pub wise_account_number: String,
    pub wise_currency: String,
}

impl UpdateGeneralInfoParams {
    /// Validates request shape: full name required and at most 99 characters, email
    /// required, phone between 9 and 18 characters.
    pub fn from_dto(dto: UpdateGeneralInfoDto) -> Result<Self, EmployeeError> {
        require(&dto.full_name, "fullName")?;
        max_len(&dto.full_name, "fullName", 99)?;
        require(&dto.email, "email")?;
        if !dto.email.contains('@') {
            return Err(EmployeeError::InvalidField("email is invalid".to_string()));
        }
        let phone_len = dto.phone.chars().count();
        if !(9..=18).contains(&phone_len) {
            return Err(EmployeeError::InvalidField(
                "phone must be between 9 and 18 characters".to_string(),
            ));
        }

        Ok(Self {
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            line_manager_id: dto.line_manager_id,
            display_name: dto.display_name,
            discord_name: dto.discord_name,
            github_id: dto.github_id,
            notion_id: dto.notion_id,
            notion_name: dto.notion_name,
            notion_email: dto.notion_email,
            linked_in_name: dto.linked_in_name,
            joined_date: dto.joined_date,
            left_date: dto.left_date,
            organization_ids: dto.organization_ids,
            referred_by: dto.referred_by,
            wise_recipient_id: dto.wise_recipient_id,
            wise_recipient_email: dto.wise_recipient_email,
            wise_recipient_name: dto.wise_recipient_name,
            wise_account_number: dto.wise_account_number,
            wise_currency: dto.wise_currency,
        })
    }

    /// Per-provider social account values carried by this update.
    pub fn social_accounts(&self) -> Vec<(SocialAccountType, SocialAccountInput)> {
        vec![
            (
                SocialAccountType::GitHub,
                SocialAccountInput {
                    account_id: self.github_id.clone(),
                    name: self.github_id.clone(),
                    email: String::new(),
                },
            ),
            (
                SocialAccountType::Notion,
                SocialAccountInput {
                    account_id: self.notion_id.clone(),
                    name: self.notion_name.clone(),
                    email: self.notion_email.clone(),
                },
            ),
            (
                SocialAccountType::LinkedIn,
                SocialAccountInput {
                    account_id: self.linked_in_name.clone(),
                    name: self.linked_in_name.clone(),
                    email: String::new(),
                },
            ),
        ]
    }
}

/// Column values written by the general-info update.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralInfoChanges {
    pub full_name: String,
    pub team_email: String,
    pub phone_number: String,
    pub line_manager_id: Option<Uuid>,
    pub display_name: String,
    pub joined_date: Option<NaiveDate>,
    pub left_date: Option<NaiveDate>,
    pub referred_by: Option<Uuid>,
    pub wise_recipient_id: String,
    pub wise_account_number: String,
    pub wise_recipient_email: String,
    pub wise_recipient_name: String,
    pub wise_currency: String,
    pub discord_account_id: Option<Uuid>,
}

impl GeneralInfoChanges {
    /// Starts from the employee's current values.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            full_name: employee.full_name.clone(),
            team_email: employee.team_email.clone(),
            phone_number: employee.phone_number.clone(),
            line_manager_id: employee.line_manager_id,
            display_name: employee.display_name.clone(),
            joined_date: employee.joined_date,
            left_date: employee.left_date,
            referred_by: employee.referred_by,
            wise_recipient_id: employee.wise_recipient_id.clone(),
            wise_account_number: employee.wise_account_number.clone(),
            wise_recipient_email: employee.wise_recipient_email.clone(),
            wise_recipient_name: employee.wise_recipient_name.clone(),
            wise_currency: employee.wise_currency.clone(),
            discord_account_id: employee.discord_account_id,
        }
    }
}

/// Parameters for creating an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEmployeeParams {
    pub full_name: String,
    pub display_name: String,
    pub team_email: String,
    pub personal_email: String,
    pub positions: Vec<Uuid>,
    pub salary: i64,
    pub seniority_id: Uuid,
    pub roles: Vec<Uuid>,
    pub status: WorkingStatus,
    pub referred_by: Option<Uuid>,
    pub joined_date: NaiveDate,
}

impl CreateEmployeeParams {
    /// Validates request shape.
    ///
    /// # Returns
    /// - `Err(EmployeeError::InvalidEmailDomain)` - Team email outside the company domains
    /// - `Err(EmployeeError::InvalidEmployeeStatus)` - Unknown status
    /// - `Err(EmployeeError::RoleCannotBeEmpty)` - No roles
    /// - `Err(EmployeeError::InvalidJoinedDate)` - Joined date not `YYYY-MM-DD`
    /// - `Err(EmployeeError::InvalidField)` - Missing name or email, negative salary
    pub fn from_dto(dto: CreateEmployeeDto) -> Result<Self, EmployeeError> {
        require(&dto.full_name, "fullName")?;
        max_len(&dto.full_name, "fullName", 99)?;
        require(&dto.display_name, "displayName")?;
        require(&dto.personal_email, "personalEmail")?;
        if !TEAM_EMAIL_DOMAINS
            .iter()
            .any(|domain| dto.team_email.ends_with(domain))
        {
            return Err(EmployeeError::InvalidEmailDomain);
        }
        if dto.salary < 0 {
            return Err(EmployeeError::InvalidField(
                "salary must not be negative".to_string(),
            ));
        }
        let status = WorkingStatus::parse(&dto.status)?;
        if dto.roles.is_empty() {
            return Err(EmployeeError::RoleCannotBeEmpty);
        }
        let joined_date =
            parse_date(&dto.joined_date).ok_or(EmployeeError::InvalidJoinedDate)?;

        Ok(Self {
            full_name: dto.full_name,
            display_name: dto.display_name,
            team_email: dto.team_email,
            personal_email: dto.personal_email,
            positions: dto.positions,
            salary: dto.salary,
            seniority_id: dto.seniority_id,
            roles: dto.roles,
            status,
            referred_by: dto.referred_by,
            joined_date,
        })
    }
}

/// Parameters for the employee search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchEmployeesParams {
    pub working_statuses: Vec<WorkingStatus>,
    pub positions: Vec<String>,
    pub stacks: Vec<String>,
    pub chapters: Vec<String>,
    pub seniorities: Vec<String>,
    pub organizations: Vec<String>,
    pub line_managers: Vec<Uuid>,
    pub keyword: String,
    /// Zero-based page index.
    pub page: u64,
    pub size: u64,
}

fn check_codes(codes: &[String], err: EmployeeError) -> Result<(), EmployeeError> {
    if codes.iter().any(|code| code.trim().is_empty()) {
        return Err(err);
    }
    Ok(())
}

impl SearchEmployeesParams {
    pub fn from_dto(dto: SearchEmployeesDto) -> Result<Self, EmployeeError> {
        check_codes(&dto.positions, EmployeeError::InvalidPositionCode)?;
        check_codes(&dto.stacks, EmployeeError::InvalidStackCode)?;
        check_codes(&dto.chapters, EmployeeError::InvalidChapterCode)?;
        check_codes(&dto.seniorities, EmployeeError::InvalidSeniorityCode)?;
        check_codes(&dto.organizations, EmployeeError::InvalidOrganizationCode)?;

        let working_statuses = dto
            .working_statuses
            .iter()
            .map(|status| WorkingStatus::parse(status))
            .collect::<Result<Vec<_>, _>>()?;

        let size = match dto.size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            working_statuses,
            positions: dto.positions,
            stacks: dto.stacks,
            chapters: dto.chapters,
            seniorities: dto.seniorities,
            organizations: dto.organizations,
            line_managers: dto.line_managers,
            keyword: dto.keyword.trim().to_string(),
            page: dto.page.unwrap_or(1).max(1) - 1,
            size,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePersonalInfoParams {
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub place_of_residence: String,
    pub address: String,
    pub personal_email: String,
    pub country: String,
    pub city: String,
}

impl UpdatePersonalInfoParams {
    pub fn from_dto(dto: UpdatePersonalInfoDto) -> Result<Self, EmployeeError> {
        require(&dto.gender, "gender")?;
        require(&dto.address, "address")?;
        max_len(&dto.address, "address", 200)?;
        require(&dto.personal_email, "personalEmail")?;
        require(&dto.country, "country")?;
        require(&dto.city, "city")?;

        Ok(Self {
            date_of_birth: dto.dob,
            gender: dto.gender,
            place_of_residence: dto.place_of_residence,
            address: dto.address,
            personal_email: dto.personal_email,
            country: dto.country,
            city: dto.city,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSkillsParams {
    pub positions: Vec<Uuid>,
    pub leading_chapters: Vec<Uuid>,
    pub chapters: Vec<Uuid>,
    pub seniority: Uuid,
    pub stacks: Vec<Uuid>,
}

impl UpdateSkillsParams {
    pub fn from_dto(dto: UpdateSkillsDto) -> Result<Self, EmployeeError> {
        if dto.positions.is_empty() {
            return Err(EmployeeError::InvalidField("positions is required".to_string()));
        }
        if dto.stacks.is_empty() {
            return Err(EmployeeError::InvalidField("stacks is required".to_string()));
        }

        Ok(Self {
            positions: dto.positions,
            leading_chapters: dto.leading_chapters,
            chapters: dto.chapters,
            seniority: dto.seniority,
            stacks: dto.stacks,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBaseSalaryParams {
    pub contract_amount: i64,
    pub company_account_amount: i64,
    pub personal_account_amount: i64,
    pub currency_code: String,
    pub effective_date: Option<NaiveDate>,
    pub batch: i32,
}

impl UpdateBaseSalaryParams {
    pub fn from_dto(dto: UpdateBaseSalaryDto) -> Result<Self, EmployeeError> {
        if dto.contract_amount < 0 || dto.company_account_amount < 0 || dto.personal_account_amount < 0
        {
            return Err(EmployeeError::InvalidField(
                "salary amounts must not be negative".to_string(),
            ));
        }
        require(&dto.currency_code, "currencyCode")?;
        if dto.batch != 1 && dto.batch != 15 {
            return Err(EmployeeError::InvalidField("batch must be 1 or 15".to_string()));
        }

        Ok(Self {
            contract_amount: dto.contract_amount,
            company_account_amount: dto.company_account_amount,
            personal_account_amount: dto.personal_account_amount,
            currency_code: dto.currency_code,
            effective_date: dto.effective_date,
            batch: dto.batch,
        })
    }

    /// Amount paid out per month, reported in the audit log.
    pub fn total(&self) -> i64 {
        self.company_account_amount + self.personal_account_amount
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRolesParams {
    pub roles: Vec<Uuid>,
}

impl UpdateRolesParams {
    pub fn from_dto(dto: UpdateRolesDto) -> Result<Self, EmployeeError> {
        if dto.roles.is_empty() {
            return Err(EmployeeError::RoleCannotBeEmpty);
        }
        Ok(Self { roles: dto.roles })
    }
}
