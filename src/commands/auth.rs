//! Login, logout, and identity commands.

use super::CliError;
use crate::auth::AuthSession;
use crate::cli::LoginArgs;
use crate::types::Credentials;

pub async fn login(session: &AuthSession, args: LoginArgs) -> Result<(), CliError> {
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| CliError::PasswordPrompt(e.to_string()))?,
    };

    let credentials = Credentials { email: args.email, password };
    let state = session.login(&credentials).await;

    if state.authenticated {
        let admin = state.admin.ok_or(CliError::NotLoggedIn)?;
        tracing::info!(email = %admin.email, "session saved");
        super::print_json(&admin)
    } else {
        Err(CliError::LoginFailed(state.error.unwrap_or_else(|| "Login failed".to_string())))
    }
}

pub fn logout(session: &AuthSession) -> Result<(), CliError> {
    session.logout();
    tracing::info!("session dropped");
    Ok(())
}

pub async fn whoami(session: &AuthSession) -> Result<(), CliError> {
    let admin = super::require_auth(session).await?;
    super::print_json(&admin)
}
