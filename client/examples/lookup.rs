use std::env;

use anyhow::Result;
use rotomdex_api::{display_name, generation_of};
use rotomdex_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let query = env::args().nth(1).unwrap_or_else(|| "pikachu".to_string());

    let client = Client::new()?;
    let composite = client.fetch_composite(&query).await?;

    let pokemon = &composite.pokemon;
    println!(
        "#{:04} {} (Gen {})",
        pokemon.id,
        display_name(&pokemon.name),
        generation_of(pokemon.id)
    );
    println!(
        "Types: {}",
        pokemon
            .type_names()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" / ")
    );
    println!("Base stat total: {}", pokemon.base_stat_total());

    if let Some(genus) = composite.species.english_genus() {
        println!("Genus: {genus}");
    }
    if let Some(text) = composite.species.english_flavor_text() {
        println!("Dex: {text}");
    }
    match composite.evolution {
        Some(chain) => println!("Line: {}", chain.species_names().join(" -> ")),
        None => println!("Line: (evolution data unavailable)"),
    }

    Ok(())
}
