use gridmon_battle::{BaseStats, DefenderTypes, Type};

use crate::species::Species;

use Type::*;

/// (dex number, name, primary type, secondary type, hp/atk/def/spa/spd/spe)
type Entry = (u16, &'static str, Type, Option<Type>, [u16; 6]);

/// Select-screen order; the grid is five icons wide
#[rustfmt::skip]
const BUILTIN: [Entry; 20] = [
    (25,  "Pikachu",   Electric, None,           [35, 55, 40, 50, 50, 90]),
    (6,   "Charizard", Fire,     Some(Flying),   [78, 84, 78, 109, 85, 100]),
    (9,   "Blastoise", Water,    None,           [79, 83, 100, 85, 105, 78]),
    (3,   "Venusaur",  Grass,    Some(Poison),   [80, 82, 83, 100, 100, 80]),
    (94,  "Gengar",    Ghost,    Some(Poison),   [60, 65, 60, 130, 75, 110]),
    (143, "Snorlax",   Normal,   None,           [160, 110, 65, 65, 110, 30]),
    (130, "Gyarados",  Water,    Some(Flying),   [95, 125, 79, 60, 100, 81]),
    (149, "Dragonite", Dragon,   Some(Flying),   [91, 134, 95, 100, 100, 80]),
    (150, "Mewtwo",    Psychic,  None,           [106, 110, 90, 154, 90, 130]),
    (448, "Lucario",   Fighting, Some(Steel),    [70, 110, 70, 115, 70, 90]),
    (249, "Lugia",     Psychic,  Some(Flying),   [106, 90, 130, 90, 154, 110]),
    (384, "Rayquaza",  Dragon,   Some(Flying),   [105, 150, 90, 150, 90, 95]),
    (257, "Blaziken",  Fire,     Some(Fighting), [80, 120, 70, 110, 70, 80]),
    (282, "Gardevoir", Psychic,  Some(Fairy),    [68, 65, 65, 125, 115, 80]),
    (445, "Garchomp",  Dragon,   Some(Ground),   [108, 130, 95, 80, 85, 102]),
    (197, "Umbreon",   Dark,     None,           [95, 65, 110, 60, 130, 65]),
    (658, "Greninja",  Water,    Some(Dark),     [72, 95, 67, 103, 71, 122]),
    (359, "Absol",     Dark,     None,           [65, 130, 60, 75, 60, 75]),
    (376, "Metagross", Steel,    Some(Psychic),  [80, 135, 130, 95, 90, 70]),
    (493, "Arceus",    Normal,   None,           [120, 120, 120, 120, 120, 120]),
];

/// The twenty built-in fighters in select-screen order
pub fn builtin_species() -> Vec<Species> {
    BUILTIN
        .iter()
        .map(|&(id, name, primary, secondary, [hp, atk, def, spa, spd, spe])| {
            let types = match secondary {
                // Table entries never repeat a type
                Some(second) => DefenderTypes::dual(primary, second)
                    .unwrap_or(DefenderTypes::single(primary)),
                None => DefenderTypes::single(primary),
            };
            Species::new(id, name, types, BaseStats::new(hp, atk, def, spa, spd, spe))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_twenty() {
        let species = builtin_species();
        assert_eq!(species.len(), 20);
        assert_eq!(species[0].name, "Pikachu");
        assert_eq!(species[19].name, "Arceus");
    }

    #[test]
    fn test_builtin_dual_types_intact() {
        for (entry, species) in BUILTIN.iter().zip(builtin_species()) {
            assert_eq!(species.types.secondary(), entry.3, "{}", species.name);
        }
    }

    #[test]
    fn test_builtin_ids_unique() {
        let mut ids: Vec<u16> = BUILTIN.iter().map(|e| e.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), BUILTIN.len());
    }
}
