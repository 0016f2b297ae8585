use std::env;

use anyhow::Result;
use rotomdex_api::display_name;
use rotomdex_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let query = env::args().nth(1).unwrap_or_else(|| "chu".to_string());

    let client = Client::new()?;
    let matches = client.search(&query, 20).await?;

    println!("{} matches for \"{query}\":\n", matches.len());
    for entry in matches {
        let types = entry
            .types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join("/");
        println!("#{:04} {:<16} {}", entry.id, display_name(&entry.name), types);
    }

    Ok(())
}
