//! The 18-type effectiveness chart (Gen 6+ rules).
//!
//! Stored sparsely: each attacking type lists only its non-neutral
//! matchups, and any pair not listed is neutral. Dual-type defense
//! multiplies the per-type multipliers.

use rotomdex_api::TypeName;

/// How a single attacking type fares against a single defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    /// 0x, the attack does nothing.
    Immune,
    /// 0.5x.
    NotVery,
    /// 1x.
    Neutral,
    /// 2x.
    Super,
}

impl Effectiveness {
    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::NotVery => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::Super => 2.0,
        }
    }

    /// Display label for a composed multiplier.
    pub fn describe(multiplier: f32) -> &'static str {
        if multiplier == 0.0 {
            "no effect"
        } else if multiplier < 1.0 {
            "not very effective"
        } else if multiplier > 1.0 {
            "super effective"
        } else {
            "normal damage"
        }
    }
}

/// Non-neutral matchups for an attacking type. Absent pairs are neutral.
fn non_neutral(attacker: TypeName) -> &'static [(TypeName, Effectiveness)] {
    use Effectiveness::{Immune, NotVery, Super};
    use TypeName::*;

    match attacker {
        Normal => &[(Rock, NotVery), (Steel, NotVery), (Ghost, Immune)],
        Fire => &[
            (Grass, Super),
            (Ice, Super),
            (Bug, Super),
            (Steel, Super),
            (Fire, NotVery),
            (Water, NotVery),
            (Rock, NotVery),
            (Dragon, NotVery),
        ],
        Water => &[
            (Fire, Super),
            (Ground, Super),
            (Rock, Super),
            (Water, NotVery),
            (Grass, NotVery),
            (Dragon, NotVery),
        ],
        Electric => &[
            (Water, Super),
            (Flying, Super),
            (Electric, NotVery),
            (Grass, NotVery),
            (Dragon, NotVery),
            (Ground, Immune),
        ],
        Grass => &[
            (Water, Super),
            (Ground, Super),
            (Rock, Super),
            (Fire, NotVery),
            (Grass, NotVery),
            (Poison, NotVery),
            (Flying, NotVery),
            (Bug, NotVery),
            (Dragon, NotVery),
            (Steel, NotVery),
        ],
        Ice => &[
            (Grass, Super),
            (Ground, Super),
            (Flying, Super),
            (Dragon, Super),
            (Fire, NotVery),
            (Water, NotVery),
            (Ice, NotVery),
            (Steel, NotVery),
        ],
        Fighting => &[
            (Normal, Super),
            (Ice, Super),
            (Rock, Super),
            (Dark, Super),
            (Steel, Super),
            (Poison, NotVery),
            (Flying, NotVery),
            (Psychic, NotVery),
            (Bug, NotVery),
            (Fairy, NotVery),
            (Ghost, Immune),
        ],
        Poison => &[
            (Grass, Super),
            (Fairy, Super),
            (Poison, NotVery),
            (Ground, NotVery),
            (Rock, NotVery),
            (Ghost, NotVery),
            (Steel, Immune),
        ],
        Ground => &[
            (Fire, Super),
            (Electric, Super),
            (Poison, Super),
            (Rock, Super),
            (Steel, Super),
            (Grass, NotVery),
            (Bug, NotVery),
            (Flying, Immune),
        ],
        Flying => &[
            (Grass, Super),
            (Fighting, Super),
            (Bug, Super),
            (Electric, NotVery),
            (Rock, NotVery),
            (Steel, NotVery),
        ],
        Psychic => &[
            (Fighting, Super),
            (Poison, Super),
            (Psychic, NotVery),
            (Steel, NotVery),
            (Dark, Immune),
        ],
        Bug => &[
            (Grass, Super),
            (Psychic, Super),
            (Dark, Super),
            (Fire, NotVery),
            (Fighting, NotVery),
            (Poison, NotVery),
            (Flying, NotVery),
            (Ghost, NotVery),
            (Steel, NotVery),
            (Fairy, NotVery),
        ],
        Rock => &[
            (Fire, Super),
            (Ice, Super),
            (Flying, Super),
            (Bug, Super),
            (Fighting, NotVery),
            (Ground, NotVery),
            (Steel, NotVery),
        ],
        Ghost => &[
            (Psychic, Super),
            (Ghost, Super),
            (Dark, NotVery),
            (Normal, Immune),
        ],
        Dragon => &[(Dragon, Super), (Steel, NotVery), (Fairy, Immune)],
        Dark => &[
            (Psychic, Super),
            (Ghost, Super),
            (Fighting, NotVery),
            (Dark, NotVery),
            (Fairy, NotVery),
        ],
        Steel => &[
            (Ice, Super),
            (Rock, Super),
            (Fairy, Super),
            (Fire, NotVery),
            (Water, NotVery),
            (Electric, NotVery),
            (Steel, NotVery),
        ],
        Fairy => &[
            (Fighting, Super),
            (Dragon, Super),
            (Dark, Super),
            (Fire, NotVery),
            (Poison, NotVery),
            (Steel, NotVery),
        ],
    }
}

/// Single-type lookup.
pub fn effectiveness(attacker: TypeName, defender: TypeName) -> Effectiveness {
    non_neutral(attacker)
        .iter()
        .find(|(ty, _)| *ty == defender)
        .map(|(_, eff)| *eff)
        .unwrap_or(Effectiveness::Neutral)
}

/// Composed multiplier against a defensive typing (one or two types; an
/// empty slice composes to 1.0).
pub fn dual_effectiveness(attacker: TypeName, defenders: &[TypeName]) -> f32 {
    defenders
        .iter()
        .map(|defender| effectiveness(attacker, *defender).multiplier())
        .product()
}

/// Attacking types that are super effective against this defensive typing.
pub fn weaknesses(defenders: &[TypeName]) -> Vec<TypeName> {
    TypeName::all()
        .iter()
        .copied()
        .filter(|attacker| dual_effectiveness(*attacker, defenders) > 1.0)
        .collect()
}

/// Attacking types this defensive typing resists (0 < multiplier < 1).
pub fn resistances(defenders: &[TypeName]) -> Vec<TypeName> {
    TypeName::all()
        .iter()
        .copied()
        .filter(|attacker| {
            let mult = dual_effectiveness(*attacker, defenders);
            mult > 0.0 && mult < 1.0
        })
        .collect()
}

/// Attacking types this defensive typing is immune to.
pub fn immunities(defenders: &[TypeName]) -> Vec<TypeName> {
    TypeName::all()
        .iter()
        .copied()
        .filter(|attacker| dual_effectiveness(*attacker, defenders) == 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_effective() {
        assert_eq!(
            effectiveness(TypeName::Fire, TypeName::Grass),
            Effectiveness::Super
        );
        assert_eq!(
            effectiveness(TypeName::Water, TypeName::Fire),
            Effectiveness::Super
        );
        assert_eq!(
            effectiveness(TypeName::Fighting, TypeName::Normal),
            Effectiveness::Super
        );
    }

    #[test]
    fn test_not_very_effective() {
        assert_eq!(
            effectiveness(TypeName::Fire, TypeName::Water),
            Effectiveness::NotVery
        );
        assert_eq!(
            effectiveness(TypeName::Grass, TypeName::Fire),
            Effectiveness::NotVery
        );
    }

    #[test]
    fn test_immunities_are_canonical() {
        // Exactly eight immune pairs exist in the modern chart.
        let mut immune_pairs = Vec::new();
        for attacker in TypeName::all() {
            for defender in TypeName::all() {
                if effectiveness(*attacker, *defender) == Effectiveness::Immune {
                    immune_pairs.push((*attacker, *defender));
                }
            }
        }

        assert_eq!(immune_pairs.len(), 8);
        assert!(immune_pairs.contains(&(TypeName::Normal, TypeName::Ghost)));
        assert!(immune_pairs.contains(&(TypeName::Ghost, TypeName::Normal)));
        assert!(immune_pairs.contains(&(TypeName::Electric, TypeName::Ground)));
        assert!(immune_pairs.contains(&(TypeName::Ground, TypeName::Flying)));
        assert!(immune_pairs.contains(&(TypeName::Psychic, TypeName::Dark)));
        assert!(immune_pairs.contains(&(TypeName::Dragon, TypeName::Fairy)));
        assert!(immune_pairs.contains(&(TypeName::Fighting, TypeName::Ghost)));
        assert!(immune_pairs.contains(&(TypeName::Poison, TypeName::Steel)));
    }

    #[test]
    fn test_no_duplicate_entries() {
        for attacker in TypeName::all() {
            let entries = non_neutral(*attacker);
            for (i, (ty, _)) in entries.iter().enumerate() {
                assert!(
                    !entries[i + 1..].iter().any(|(other, _)| other == ty),
                    "duplicate matchup for {attacker} vs {ty}"
                );
            }
        }
    }

    #[test]
    fn test_dual_composition_multiplies() {
        // Ice vs Grass/Flying: 2 x 2 = 4.
        assert_eq!(
            dual_effectiveness(TypeName::Ice, &[TypeName::Grass, TypeName::Flying]),
            4.0
        );
        // Fire vs Water/Rock: 0.5 x 0.5 = 0.25.
        assert_eq!(
            dual_effectiveness(TypeName::Fire, &[TypeName::Water, TypeName::Rock]),
            0.25
        );
        // Ground vs Flying/Steel: immune wins the product.
        assert_eq!(
            dual_effectiveness(TypeName::Ground, &[TypeName::Flying, TypeName::Steel]),
            0.0
        );
        // 2 x 0.5 nets neutral.
        assert_eq!(
            dual_effectiveness(TypeName::Fire, &[TypeName::Grass, TypeName::Rock]),
            1.0
        );
    }

    #[test]
    fn test_dual_composition_commutes() {
        for attacker in TypeName::all() {
            for a in TypeName::all() {
                for b in TypeName::all() {
                    assert_eq!(
                        dual_effectiveness(*attacker, &[*a, *b]),
                        dual_effectiveness(*attacker, &[*b, *a]),
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_matches_dual_of_one() {
        for attacker in TypeName::all() {
            for defender in TypeName::all() {
                assert_eq!(
                    effectiveness(*attacker, *defender).multiplier(),
                    dual_effectiveness(*attacker, &[*defender]),
                );
            }
        }
    }

    #[test]
    fn test_empty_defense_is_neutral() {
        assert_eq!(dual_effectiveness(TypeName::Fire, &[]), 1.0);
    }

    #[test]
    fn test_matchup_queries() {
        // Pure Water: weak to Electric and Grass, resists Fire/Water/Ice/Steel.
        let water = [TypeName::Water];
        assert_eq!(
            weaknesses(&water),
            vec![TypeName::Electric, TypeName::Grass]
        );
        assert_eq!(
            resistances(&water),
            vec![TypeName::Fire, TypeName::Water, TypeName::Ice, TypeName::Steel]
        );
        assert!(immunities(&water).is_empty());

        // Flying/Steel is immune to Ground.
        assert_eq!(
            immunities(&[TypeName::Flying, TypeName::Steel]),
            vec![TypeName::Ground]
        );
    }

    #[test]
    fn test_describe_labels() {
        assert_eq!(Effectiveness::describe(0.0), "no effect");
        assert_eq!(Effectiveness::describe(0.25), "not very effective");
        assert_eq!(Effectiveness::describe(1.0), "normal damage");
        assert_eq!(Effectiveness::describe(4.0), "super effective");
    }
}
