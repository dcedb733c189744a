use gridmon_battle::{Move, MoveCategory, Type};

use MoveCategory::*;
use Type::*;

/// (id, name, type, category, power, description)
type MoveEntry = (&'static str, &'static str, Type, MoveCategory, u16, &'static str);

/// One starter move per type, offered as round rewards
#[rustfmt::skip]
const BUILTIN_MOVES: [MoveEntry; 18] = [
    ("tackle",       "Tackle",        Normal,   Physical, 40, "A full-body charge."),
    ("ember",        "Ember",         Fire,     Special,  40, "A small flame."),
    ("watergun",     "Water Gun",     Water,    Special,  40, "A jet of water."),
    ("thundershock", "Thunder Shock", Electric, Special,  40, "A jolt of electricity."),
    ("vinewhip",     "Vine Whip",     Grass,    Physical, 45, "A lash of slender vines."),
    ("powdersnow",   "Powder Snow",   Ice,      Special,  40, "A chilling gust of snow."),
    ("karatechop",   "Karate Chop",   Fighting, Physical, 50, "A sharp chopping blow."),
    ("poisonsting",  "Poison Sting",  Poison,   Physical, 15, "A toxic barb."),
    ("mudslap",      "Mud-Slap",      Ground,   Special,  20, "A face full of mud."),
    ("gust",         "Gust",          Flying,   Special,  40, "A gust of wind."),
    ("confusion",    "Confusion",     Psychic,  Special,  50, "A weak telekinetic force."),
    ("bugbite",      "Bug Bite",      Bug,      Physical, 60, "A quick bite."),
    ("rockthrow",    "Rock Throw",    Rock,     Physical, 50, "A hurled small rock."),
    ("lick",         "Lick",          Ghost,    Physical, 30, "A ghostly lick."),
    ("dragonbreath", "Dragon Breath", Dragon,   Special,  60, "A scorching breath."),
    ("bite",         "Bite",          Dark,     Physical, 60, "A vicious bite."),
    ("metalclaw",    "Metal Claw",    Steel,    Physical, 50, "Steel-hard claws."),
    ("fairywind",    "Fairy Wind",    Fairy,    Special,  40, "A fairy-dust breeze."),
];

/// Starter moves, one per type in chart order
pub fn builtin_moves() -> Vec<Move> {
    BUILTIN_MOVES
        .iter()
        .map(|&(id, name, move_type, category, power, description)| {
            Move::new(id, name, move_type, category, power).with_description(description)
        })
        .collect()
}

/// The starter move of a given type
pub fn starter_move(move_type: Type) -> Move {
    let (id, name, t, category, power, description) = BUILTIN_MOVES[move_type.index()];
    Move::new(id, name, t, category, power).with_description(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_move_per_type_in_order() {
        let moves = builtin_moves();
        assert_eq!(moves.len(), Type::COUNT);
        for (mv, t) in moves.iter().zip(Type::ALL) {
            assert_eq!(mv.move_type, t, "{}", mv.name);
            assert!(mv.is_damaging());
        }
    }

    #[test]
    fn test_starter_move() {
        let mv = starter_move(Type::Electric);
        assert_eq!(mv.id, "thundershock");
        assert_eq!(mv.power, 40);
        assert_eq!(mv.cooldown, 1000);
    }
}
