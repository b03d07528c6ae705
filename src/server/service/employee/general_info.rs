use sea_orm::{DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        discord_account::DiscordAccountRepository, employee::EmployeeRepository,
        organization::OrganizationRepository, social_account::SocialAccountRepository,
    },
    error::{employee::EmployeeError, AppError},
    model::{
        employee::{EmployeeDetails, GeneralInfoChanges, UpdateGeneralInfoParams},
        social_account::SocialAccountChanges,
    },
    service::{
        discord::DiscordDirectory,
        employee::{all_found, load_details, EmployeeService},
    },
    util::parse::parse_date,
};

/// Overwrites `target` with the value as sent unless it is blank.
fn apply_non_blank(target: &mut String, value: &str) {
    if !value.trim().is_empty() {
        *target = value.to_string();
    }
}

impl<'a> EmployeeService<'a> {
    /// Updates an employee's general information.
    ///
    /// Checks run in a fixed order and the first failure aborts the whole update:
    /// line manager, referrer, employee, team email, dates, Discord account, then
    /// organizations. Blank scalar fields keep their stored value, while the line
    /// manager and referrer are always overwritten, so omitting them clears them.
    ///
    /// # Arguments
    /// - `directory` - Resolves the submitted Discord username to a guild member
    /// - `employee_id` - Employee to update
    /// - `params` - Validated update parameters
    ///
    /// # Returns
    /// - `Ok(EmployeeDetails)` - Employee as stored after the update
    /// - `Err(AppError::EmployeeErr(_))` - A reference is missing, a value conflicts with
    ///   another employee or a date is invalid; nothing was written
    /// - `Err(AppError)` - Database or Discord error; nothing was written
    pub async fn update_general_info(
        &self,
        directory: &dyn DiscordDirectory,
        employee_id: Uuid,
        params: UpdateGeneralInfoParams,
    ) -> Result<EmployeeDetails, AppError> {
        let txn = self.db.begin().await?;
        let employee_repo = EmployeeRepository::new(&txn);

        if let Some(line_manager_id) = params.line_manager_id {
            if !employee_repo.exists(line_manager_id).await? {
                return Err(EmployeeError::LineManagerNotFound.into());
            }
        }

        if let Some(referrer_id) = params.referred_by {
            if !employee_repo.exists(referrer_id).await? {
                return Err(EmployeeError::ReferrerNotFound.into());
            }
            if referrer_id == employee_id {
                return Err(EmployeeError::CannotSelfReferral.into());
            }
        }

        let employee = employee_repo
            .find_by_id(employee_id)
            .await?
            .ok_or(EmployeeError::EmployeeNotFound)?;

        let email = params.email.trim();
        if !email.is_empty()
            && !employee.team_email.is_empty()
            && employee.team_email != email
            && employee_repo.find_by_team_email(email).await?.is_some()
        {
            return Err(EmployeeError::EmailExisted.into());
        }

        let mut changes = GeneralInfoChanges::from_employee(&employee);
        apply_non_blank(&mut changes.full_name, &params.full_name);
        apply_non_blank(&mut changes.team_email, &params.email);
        apply_non_blank(&mut changes.phone_number, &params.phone);
        apply_non_blank(&mut changes.display_name, &params.display_name);
        apply_non_blank(&mut changes.wise_recipient_id, &params.wise_recipient_id);
        apply_non_blank(&mut changes.wise_account_number, &params.wise_account_number);
        apply_non_blank(&mut changes.wise_recipient_email, &params.wise_recipient_email);
        apply_non_blank(&mut changes.wise_recipient_name, &params.wise_recipient_name);
        apply_non_blank(&mut changes.wise_currency, &params.wise_currency);

        let joined_date = params.joined_date.trim();
        if !joined_date.is_empty() {
            changes.joined_date =
                Some(parse_date(joined_date).ok_or(EmployeeError::InvalidJoinedDate)?);
        }
        let left_date = params.left_date.trim();
        if !left_date.is_empty() {
            changes.left_date =
                Some(parse_date(left_date).ok_or(EmployeeError::InvalidLeftDate)?);
        }
        if let (Some(joined), Some(left)) = (changes.joined_date, changes.left_date) {
            if left < joined {
                return Err(EmployeeError::LeftDateBeforeJoinedDate.into());
            }
        }

        changes.line_manager_id = params.line_manager_id;
        changes.referred_by = params.referred_by;

        let discord_name = params.discord_name.trim();
        if !discord_name.is_empty() {
            changes.discord_account_id =
                Some(link_discord_account(&txn, directory, employee_id, discord_name).await?);
        }

        sync_social_accounts(&txn, employee_id, &params).await?;

        let updated = employee_repo
            .update_general_info(employee_id, changes)
            .await?;

        if !params.organization_ids.is_empty() {
            let organization_repo = OrganizationRepository::new(&txn);
            let organizations = organization_repo.all().await?;
            if !all_found(&params.organization_ids, &organizations) {
                return Err(EmployeeError::OrganizationNotFound.into());
            }
            organization_repo
                .replace_for_employee(employee_id, &params.organization_ids)
                .await?;
        }

        let details = load_details(&txn, updated).await?;

        txn.commit().await?;

        tracing::info!("Updated general info of employee {}", employee_id);

        Ok(details)
    }
}

/// Resolves a Discord username and links the matching account to the employee.
///
/// # Returns
/// - `Ok(Uuid)` - Id of the Discord account row to link
/// - `Err(AppError::EmployeeErr(DiscordMemberNotFoundInGuild))` - No such guild member
/// - `Err(AppError::EmployeeErr(DiscordAccountAlreadyUsedByAnotherEmployee))` - The member
///   is already linked to a different employee
async fn link_discord_account(
    txn: &DatabaseTransaction,
    directory: &dyn DiscordDirectory,
    employee_id: Uuid,
    discord_name: &str,
) -> Result<Uuid, AppError> {
    let member = directory
        .member_by_username(discord_name)
        .await?
        .ok_or(EmployeeError::DiscordMemberNotFoundInGuild)?;

    if let Some(holder) = EmployeeRepository::new(txn)
        .find_by_discord_id(&member.discord_id)
        .await?
    {
        if holder.id != employee_id {
            return Err(EmployeeError::DiscordAccountAlreadyUsedByAnotherEmployee.into());
        }
    }

    let account = DiscordAccountRepository::new(txn)
        .upsert(&member.discord_id, discord_name)
        .await?;

    Ok(account.id)
}

/// Brings the GitHub, Notion and LinkedIn accounts in line with the update.
///
/// Existing rows are updated, missing providers are created and rows of any other
/// provider are left alone.
async fn sync_social_accounts(
    txn: &DatabaseTransaction,
    employee_id: Uuid,
    params: &UpdateGeneralInfoParams,
) -> Result<(), AppError> {
    let social_repo = SocialAccountRepository::new(txn);
    let existing = social_repo.find_by_employee(employee_id).await?;

    for (account_type, input) in params.social_accounts() {
        match existing
            .iter()
            .find(|account| account.account_type == account_type.as_str())
        {
            Some(account) => {
                social_repo
                    .update(
                        account.id,
                        SocialAccountChanges::for_existing(account_type, &input),
                    )
                    .await?;
            }
            None => {
                social_repo.create(employee_id, account_type, &input).await?;
            }
        }
    }

    Ok(())
}
