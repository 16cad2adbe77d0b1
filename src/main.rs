//! eventdesk console binary.

use clap::Parser;

#[tokio::main]
async fn main() {
    // Logs go to stderr so piped JSON output stays clean.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = eventdesk::cli::Cli::parse();
    if let Err(e) = eventdesk::commands::run(cli).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}
