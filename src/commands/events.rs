//! Event catalog commands. Update is fetch-merge-put: only the fields the
//! operator names change, everything else round-trips untouched.

use super::CliError;
use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::cli::{EventCreateArgs, EventSubcommand, EventUpdateArgs};
use crate::types::Event;

pub async fn run(
    client: &ApiClient,
    session: &AuthSession,
    command: EventSubcommand,
) -> Result<(), CliError> {
    super::require_auth(session).await?;

    match command {
        EventSubcommand::List => super::print_json(&client.events().list().await?),
        EventSubcommand::Get { id } => super::print_json(&client.events().get(&id).await?),
        EventSubcommand::Create(args) => {
            let created = client.events().create(&new_event(args)).await?;
            tracing::info!(name = %created.name, "event created");
            super::print_json(&created)
        }
        EventSubcommand::Update(args) => {
            let mut event = client.events().get(&args.id).await?;
            apply_update(&mut event, &args);
            let updated = client.events().update(&args.id, &event).await?;
            tracing::info!(id = %args.id, "event updated");
            super::print_json(&updated)
        }
        EventSubcommand::Delete { id, force } => {
            if !force && !super::confirm(&format!("Delete event {id}?"))? {
                tracing::info!("delete aborted");
                return Ok(());
            }
            client.events().delete(&id).await?;
            tracing::info!(%id, "event deleted");
            Ok(())
        }
    }
}

/// New events start with registration open (unless told otherwise), no
/// results, and no winners; those come later through update.
fn new_event(args: EventCreateArgs) -> Event {
    Event {
        id: None,
        event_id: None,
        name: args.name,
        image_link: args.image_link,
        date: args.date,
        pdf_link: args.pdf_link,
        is_open: args.open.unwrap_or(true),
        is_result_announced: false,
        winners: None,
        prize: args.prize,
        location: args.location,
        description: args.description,
        participants_count: None,
    }
}

fn apply_update(event: &mut Event, args: &EventUpdateArgs) {
    if let Some(name) = &args.name {
        event.name = name.clone();
    }
    if let Some(image_link) = &args.image_link {
        event.image_link = image_link.clone();
    }
    if let Some(date) = &args.date {
        event.date = date.clone();
    }
    if let Some(pdf_link) = &args.pdf_link {
        event.pdf_link = pdf_link.clone();
    }
    if let Some(open) = args.open {
        event.is_open = open;
    }
    if let Some(result_announced) = args.result_announced {
        event.is_result_announced = result_announced;
    }
    if !args.winners.is_empty() {
        event.winners = Some(args.winners.clone());
    }
    if let Some(prize) = &args.prize {
        event.prize = prize.clone();
    }
    if let Some(location) = &args.location {
        event.location = location.clone();
    }
    if let Some(description) = &args.description {
        event.description = description.clone();
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
