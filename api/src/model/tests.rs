#[cfg(test)]
mod tests {
    use crate::model::{EvolutionChain, MoveData, Pokemon, ResourcePage, Species, TypeInfo};
    use crate::types::TypeName;
    use crate::util::display_name;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "front_shiny": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/shiny/25.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png",
                    "front_shiny": null
                }
            }
        },
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ],
        "abilities": [
            {"is_hidden": false, "slot": 1, "ability": {"name": "static", "url": ""}}
        ],
        "moves": [
            {"move": {"name": "thunder-shock", "url": "https://pokeapi.co/api/v2/move/84/"}},
            {"move": {"name": "quick-attack", "url": "https://pokeapi.co/api/v2/move/98/"}}
        ],
        "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
    }"#;

    #[test]
    fn test_parse_pokemon() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.id, 25);
        assert_eq!(display_name(&pokemon.name), "Pikachu");
        assert_eq!(pokemon.type_names(), vec![TypeName::Electric]);
        assert_eq!(pokemon.base_stat("speed"), Some(90));
        assert_eq!(pokemon.base_stat_total(), 180);
        assert_eq!(pokemon.move_names(), vec!["thunder-shock", "quick-attack"]);
    }

    #[test]
    fn test_sprite_fallback_chain() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        // Official artwork wins over the plain front sprite.
        assert!(pokemon.sprite(false).unwrap().contains("official-artwork"));
        // Shiny artwork is null here, so the plain shiny sprite wins.
        assert!(pokemon.sprite(true).unwrap().contains("shiny"));
    }

    #[test]
    fn test_parse_pokemon_minimal() {
        // Everything optional absent: must still parse.
        let pokemon: Pokemon = serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).unwrap();

        assert_eq!(pokemon.id, 1);
        assert!(pokemon.type_names().is_empty());
        assert_eq!(pokemon.sprite(false), None);
        assert_eq!(pokemon.base_stat_total(), 0);
    }

    #[test]
    fn test_unknown_type_names_skipped() {
        let pokemon: Pokemon = serde_json::from_str(
            r#"{
                "id": 9999,
                "name": "glitch",
                "types": [
                    {"slot": 1, "type": {"name": "???", "url": ""}},
                    {"slot": 2, "type": {"name": "water", "url": ""}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(pokemon.type_names(), vec![TypeName::Water]);
    }

    #[test]
    fn test_parse_species() {
        let species: Species = serde_json::from_str(
            r#"{
                "id": 25,
                "name": "pikachu",
                "is_legendary": false,
                "capture_rate": 190,
                "flavor_text_entries": [
                    {"flavor_text": "Ein Elektro-Pokemon.", "language": {"name": "de", "url": ""}},
                    {"flavor_text": "When several of\nthese POKeMON\ngather.", "language": {"name": "en", "url": ""}}
                ],
                "genera": [
                    {"genus": "Mouse Pokemon", "language": {"name": "en", "url": ""}}
                ],
                "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/10/"}
            }"#,
        )
        .unwrap();

        assert_eq!(species.evolution_chain_id(), Some(10));
        assert_eq!(
            species.english_flavor_text().unwrap(),
            "When several of these POKeMON gather."
        );
        assert_eq!(species.english_genus(), Some("Mouse Pokemon"));
    }

    #[test]
    fn test_parse_evolution_chain() {
        let chain: EvolutionChain = serde_json::from_str(
            r#"{
                "id": 10,
                "chain": {
                    "species": {"name": "pichu", "url": ""},
                    "evolves_to": [
                        {
                            "species": {"name": "pikachu", "url": ""},
                            "evolves_to": [
                                {"species": {"name": "raichu", "url": ""}, "evolves_to": []}
                            ]
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(chain.species_names(), vec!["pichu", "pikachu", "raichu"]);
    }

    #[test]
    fn test_parse_move() {
        let mv: MoveData = serde_json::from_str(
            r#"{
                "id": 84,
                "name": "thunder-shock",
                "power": 40,
                "accuracy": 100,
                "pp": 30,
                "priority": 0,
                "type": {"name": "electric", "url": ""},
                "effect_entries": [
                    {"effect": "...", "short_effect": "Has a 10% chance to paralyze.", "language": {"name": "en", "url": ""}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(mv.power, Some(40));
        assert_eq!(mv.english_effect(), Some("Has a 10% chance to paralyze."));
    }

    #[test]
    fn test_parse_resource_page() {
        let page: ResourcePage = serde_json::from_str(
            r#"{
                "count": 1302,
                "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
                "previous": null,
                "results": [
                    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                    {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.count, 1302);
        assert_eq!(page.results[1].id(), Some(2));
    }

    #[test]
    fn test_parse_type_info() {
        let info: TypeInfo = serde_json::from_str(
            r#"{
                "id": 13,
                "name": "electric",
                "damage_relations": {
                    "double_damage_to": [{"name": "water", "url": ""}, {"name": "flying", "url": ""}],
                    "no_damage_to": [{"name": "ground", "url": ""}]
                },
                "pokemon": [
                    {"pokemon": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(info.damage_relations.double_damage_to.len(), 2);
        assert_eq!(info.pokemon[0].pokemon.id(), Some(25));
    }
}
