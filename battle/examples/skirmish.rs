use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::Mutex;

use rotomdex_api::display_name;
use rotomdex_battle::{
    generate_opposing_roster, schedule_opponent_turn, Battle, BattleEvent, BattlePhase, Combatant,
    SharedBattle, Side,
};
use rotomdex_client::Client;
use rotomdex_trainer::TeamMember;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::new()?;
    let mut rng = StdRng::seed_from_u64(rand::thread_rng().next_u64());

    // A small fixed team for the demo.
    let mut team = Vec::new();
    for (name, level) in [("pikachu", 50), ("charizard", 52), ("blastoise", 51)] {
        let pokemon = client.fetch_pokemon(name).await?;
        let mut member = TeamMember::from_pokemon(&pokemon, level);
        member.moves = pokemon
            .move_names()
            .into_iter()
            .take(4)
            .map(str::to_owned)
            .collect();
        team.push(member);
    }

    let opposing = generate_opposing_roster(&client, &mut rng).await;
    println!(
        "Opposing roster: {}",
        opposing
            .iter()
            .map(|c| display_name(&c.name))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let shared: SharedBattle = Arc::new(Mutex::new(Battle::new()));
    {
        let mut battle = shared.lock().await;
        battle.start(
            team.iter().map(Combatant::from_team_member).collect(),
            opposing,
        )?;
    }

    loop {
        let token = {
            let mut battle = shared.lock().await;
            if battle.phase != BattlePhase::InProgress {
                break;
            }
            battle.play_move(0, &mut rng)?
        };

        // Short delay for the demo; the application uses OPPONENT_DELAY.
        schedule_opponent_turn(shared.clone(), token, Duration::from_millis(300)).await?;
    }

    let battle = shared.lock().await;
    for event in &battle.log {
        match event {
            BattleEvent::Started => println!("Battle started!"),
            BattleEvent::MoveUsed {
                attacker,
                move_name,
                damage,
                ..
            } => println!(
                "{} used {} (-{damage} HP)",
                display_name(attacker),
                display_name(move_name)
            ),
            BattleEvent::Fainted { name, .. } => println!("{} fainted!", display_name(name)),
            BattleEvent::Concluded { winner } => match winner {
                Side::Player => println!("You win!"),
                Side::Opponent => println!("You lose!"),
            },
        }
    }

    Ok(())
}
