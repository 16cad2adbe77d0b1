//! Notification catalog commands.

use super::CliError;
use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::cli::NotificationSubcommand;
use crate::types::Notification;

pub async fn run(
    client: &ApiClient,
    session: &AuthSession,
    command: NotificationSubcommand,
) -> Result<(), CliError> {
    super::require_auth(session).await?;

    match command {
        NotificationSubcommand::List => super::print_json(&client.notifications().list().await?),
        NotificationSubcommand::Get { id } => {
            super::print_json(&client.notifications().get(&id).await?)
        }
        NotificationSubcommand::Create { title, message, date } => {
            let notification = Notification { id: None, title, message, date };
            let created = client.notifications().create(&notification).await?;
            tracing::info!(title = %created.title, "notification published");
            super::print_json(&created)
        }
        NotificationSubcommand::Update { id, title, message, date } => {
            let mut notification = client.notifications().get(&id).await?;
            if let Some(title) = title {
                notification.title = title;
            }
            if let Some(message) = message {
                notification.message = message;
            }
            if let Some(date) = date {
                notification.date = Some(date);
            }
            let updated = client.notifications().update(&id, &notification).await?;
            tracing::info!(%id, "notification updated");
            super::print_json(&updated)
        }
        NotificationSubcommand::Delete { id, force } => {
            if !force && !super::confirm(&format!("Delete notification {id}?"))? {
                tracing::info!("delete aborted");
                return Ok(());
            }
            client.notifications().delete(&id).await?;
            tracing::info!(%id, "notification deleted");
            Ok(())
        }
    }
}
