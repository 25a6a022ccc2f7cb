//! Look up Twitch users from the command line.
//!
//! Numeric arguments are treated as user ids, anything else as a login.
//! With no arguments the configured `TWITCH_USER_ID` is looked up.

use tracing_subscriber::EnvFilter;

use helix_client::{ClientConfig, HelixClient};

fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Split arguments into (ids, logins).
fn partition_args(args: impl IntoIterator<Item = String>) -> (Vec<String>, Vec<String>) {
    args.into_iter()
        .filter(|a| !a.trim().is_empty())
        .partition(|a| a.chars().all(|c| c.is_ascii_digit()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    load_dotenv();

    let config = ClientConfig::from_env()?;
    let client = HelixClient::from_config(&config)?;

    let (mut ids, logins) = partition_args(std::env::args().skip(1));
    if ids.is_empty() && logins.is_empty() {
        match client.user_id() {
            Some(id) => ids.push(id.to_string()),
            None => anyhow::bail!("usage: helix-users <id|login>... (or set TWITCH_USER_ID)"),
        }
    }

    let users = client.get_users(&ids, &logins).await?;
    if users.data.is_empty() {
        tracing::warn!(ids = ids.len(), logins = logins.len(), "No matching users");
    }
    for user in &users.data {
        println!("{}\t{}\t{}", user.id, user.login, user.display_name);
    }

    Ok(())
}
