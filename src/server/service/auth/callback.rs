use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serenity::all::User as DiscordUser;

use crate::server::{
    data::employee::EmployeeRepository,
    error::{auth::AuthError, AppError},
    model::employee::Employee,
    service::auth::{DiscordAuthService, DISCORD_USER_URL},
};

impl<'a> DiscordAuthService<'a> {
    /// Completes the OAuth2 flow and resolves the employee behind the Discord account.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the Discord callback query
    ///
    /// # Returns
    /// - `Ok(Employee)` - Employee linked to the Discord account
    /// - `Err(AppError::AuthErr(TokenExchange))` - Discord rejected the code
    /// - `Err(AppError::AuthErr(EmployeeNotLinked))` - No employee holds the account
    /// - `Err(AppError::ReqwestErr)` - Fetching the Discord user failed
    pub async fn callback(&self, authorization_code: String) -> Result<Employee, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        let user = self.fetch_discord_user(&token).await?;
        let discord_id = user.id.get().to_string();

        let employee = EmployeeRepository::new(self.db)
            .find_by_discord_id(&discord_id)
            .await?
            .ok_or(AuthError::EmployeeNotLinked(discord_id))?;

        tracing::info!("Employee {} logged in as {}", employee.id, user.name);

        Ok(employee)
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(DISCORD_USER_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
