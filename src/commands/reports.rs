//! Report commands. `summary` mirrors the dashboard: all five reads go
//! out at once, each runs to completion on its own, and any rejection
//! fails the assembled view afterward.

use super::CliError;
use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::cli::ReportSubcommand;

pub async fn run(
    client: &ApiClient,
    session: &AuthSession,
    command: ReportSubcommand,
) -> Result<(), CliError> {
    super::require_auth(session).await?;
    let reports = client.reports();

    match command {
        ReportSubcommand::Stats => super::print_json(&reports.stats().await?),
        ReportSubcommand::EventsTrend => super::print_json(&reports.event_trend().await?),
        ReportSubcommand::UsersTrend => super::print_json(&reports.user_trend().await?),
        ReportSubcommand::Branches => super::print_json(&reports.user_branches().await?),
        ReportSubcommand::Batches => super::print_json(&reports.user_batches().await?),
        ReportSubcommand::Summary => {
            // join, not try_join: one failed read must not cancel the rest.
            let (stats, event_trend, user_trend, branches, batches) = tokio::join!(
                reports.stats(),
                reports.event_trend(),
                reports.user_trend(),
                reports.user_branches(),
                reports.user_batches(),
            );
            let (stats, event_trend, user_trend, branches, batches) =
                (stats?, event_trend?, user_trend?, branches?, batches?);
            super::print_json(&serde_json::json!({
                "stats": stats,
                "eventTrend": event_trend,
                "userTrend": user_trend,
                "branches": branches,
                "batches": batches,
            }))
        }
    }
}
