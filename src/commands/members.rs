//! Member catalog commands. Same fetch-merge-put shape as events; the
//! password is write-only, so updates leave it out unless a new one is
//! given.

use super::CliError;
use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::cli::{MemberCreateArgs, MemberSubcommand, MemberUpdateArgs};
use crate::types::User;

pub async fn run(
    client: &ApiClient,
    session: &AuthSession,
    command: MemberSubcommand,
) -> Result<(), CliError> {
    super::require_auth(session).await?;

    match command {
        MemberSubcommand::List => super::print_json(&client.members().list().await?),
        MemberSubcommand::Get { id } => super::print_json(&client.members().get(&id).await?),
        MemberSubcommand::Create(args) => {
            let created = client.members().create(&new_member(args)).await?;
            tracing::info!(email = %created.email, "member registered");
            super::print_json(&created)
        }
        MemberSubcommand::Update(args) => {
            let mut user = client.members().get(&args.id).await?;
            apply_update(&mut user, &args);
            let updated = client.members().update(&args.id, &user).await?;
            tracing::info!(id = %args.id, "member updated");
            super::print_json(&updated)
        }
        MemberSubcommand::Delete { id, force } => {
            if !force && !super::confirm(&format!("Delete member {id}?"))? {
                tracing::info!("delete aborted");
                return Ok(());
            }
            client.members().delete(&id).await?;
            tracing::info!(%id, "member deleted");
            Ok(())
        }
    }
}

fn new_member(args: MemberCreateArgs) -> User {
    User {
        id: None,
        user_id: None,
        name: args.name,
        email: args.email,
        password: args.password,
        branch: args.branch,
        batch: args.batch,
        regno: args.regno,
        mobileno: args.mobileno,
        is_verified: args.verified.unwrap_or(false),
    }
}

fn apply_update(user: &mut User, args: &MemberUpdateArgs) {
    if let Some(name) = &args.name {
        user.name = name.clone();
    }
    if let Some(email) = &args.email {
        user.email = email.clone();
    }
    if let Some(password) = &args.password {
        user.password = Some(password.clone());
    }
    if let Some(branch) = &args.branch {
        user.branch = branch.clone();
    }
    if let Some(batch) = args.batch {
        user.batch = batch;
    }
    if let Some(regno) = args.regno {
        user.regno = regno;
    }
    if let Some(mobileno) = args.mobileno {
        user.mobileno = mobileno;
    }
    if let Some(verified) = args.verified {
        user.is_verified = verified;
    }
}

#[cfg(test)]
#[path = "members_test.rs"]
mod tests;
