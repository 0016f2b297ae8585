use chrono::Local;
use rand::thread_rng;

use rotomdex_api::PokemonSummary;
use rotomdex_trainer::{Action, FileStorage, Store, TeamMember};

fn main() {
    let storage = FileStorage::new(".rotomdex");
    let mut store = Store::load(Box::new(storage));

    let today = Local::now().format("%Y-%m-%d").to_string();
    store.refresh_daily_pick(&today, &mut thread_rng());

    store.dispatch(Action::AddFavorite(25));
    store.dispatch(Action::View(PokemonSummary::bare(25, "pikachu")));
    store.dispatch(Action::AddToTeam(TeamMember {
        id: 25,
        name: "pikachu".to_string(),
        sprite: None,
        types: Vec::new(),
        level: 50,
        moves: vec!["thunder-shock".to_string(), "quick-attack".to_string()],
        nickname: None,
    }));

    let state = store.state();
    println!("Favorites: {:?}", state.favorites);
    println!(
        "Team: {:?}",
        state.team.iter().map(|m| m.display_name()).collect::<Vec<_>>()
    );
    println!(
        "Daily pick for {today}: {:?}",
        state.daily_pick.as_ref().map(|p| p.id)
    );
}
