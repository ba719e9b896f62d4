use super::movement::*;
use super::{Category, Piece};
use crate::grid::Offset;

fn piece(name: &'static str, category: Category, parts: Vec<Vec<Movement>>) -> Piece {
    Piece {
        name,
        category,
        movements: parts.into_iter().flatten().collect(),
    }
}

fn offsets(pairs: &[(i32, i32)]) -> Vec<Offset> {
    pairs.iter().copied().map(Offset::from).collect()
}

fn king() -> Vec<Movement> {
    steps(&ALL_DIRECTIONS)
}

fn knight() -> Vec<Movement> {
    leaper(2, 1)
}

fn lion() -> Vec<Movement> {
    [king(), leaper(2, 0), leaper(2, 1), leaper(2, 2)].concat()
}

fn all_but(excluded: &[Offset]) -> Vec<Offset> {
    ALL_DIRECTIONS
        .iter()
        .copied()
        .filter(|direction| !excluded.contains(direction))
        .collect()
}

pub(super) fn standard_pieces() -> Vec<Piece> {
    use Category::Standard;

    vec![
        piece("King", Standard, vec![king()]),
        piece("Queen", Standard, vec![slides(&ALL_DIRECTIONS)]),
        piece("Rook", Standard, vec![slides(&ORTHOGONAL)]),
        piece("Bishop", Standard, vec![slides(&DIAGONAL)]),
        piece("Knight", Standard, vec![knight()]),
        piece("Pawn", Standard, vec![steps(&[FORWARD])]),
    ]
}

pub(super) fn fairy_pieces() -> Vec<Piece> {
    use Category::Fairy;

    vec![
        piece("Wazir", Fairy, vec![leaper(1, 0)]),
        piece("Ferz", Fairy, vec![leaper(1, 1)]),
        piece("Dabbaba", Fairy, vec![leaper(2, 0)]),
        piece("Alfil", Fairy, vec![leaper(2, 2)]),
        piece("Threeleaper", Fairy, vec![leaper(3, 0)]),
        piece("Tripper", Fairy, vec![leaper(3, 3)]),
        piece("Camel", Fairy, vec![leaper(3, 1)]),
        piece("Zebra", Fairy, vec![leaper(3, 2)]),
        piece("Giraffe", Fairy, vec![leaper(4, 1)]),
        piece("Antelope", Fairy, vec![leaper(4, 3)]),
        piece("Gnu", Fairy, vec![knight(), leaper(3, 1)]),
        piece("Bison", Fairy, vec![leaper(3, 1), leaper(3, 2)]),
        piece("Nightrider", Fairy, vec![rider(2, 1)]),
        piece("Amazon", Fairy, vec![knight(), slides(&ALL_DIRECTIONS)]),
        piece("Archbishop", Fairy, vec![knight(), slides(&DIAGONAL)]),
        piece("Chancellor", Fairy, vec![knight(), slides(&ORTHOGONAL)]),
        piece("Centaur", Fairy, vec![king(), knight()]),
        piece("Champion", Fairy, vec![leaper(1, 0), leaper(2, 0), leaper(2, 2)]),
        piece("Wizard", Fairy, vec![leaper(1, 1), leaper(3, 1)]),
        piece("Squirrel", Fairy, vec![leaper(2, 0), leaper(2, 2), knight()]),
        piece("Alibaba", Fairy, vec![leaper(2, 0), leaper(2, 2)]),
        piece(
            "Grasshopper",
            Fairy,
            vec![
                ALL_DIRECTIONS
                    .iter()
                    .map(|&step| Movement::Slide {
                        step,
                        min: 2,
                        limit: None,
                    })
                    .collect(),
            ],
        ),
    ]
}

pub(super) fn xiangqi_pieces() -> Vec<Piece> {
    use Category::Xiangqi;

    vec![
        piece("Xiangqi General", Xiangqi, vec![steps(&ORTHOGONAL)]),
        piece("Xiangqi Advisor", Xiangqi, vec![steps(&DIAGONAL)]),
        piece("Xiangqi Elephant", Xiangqi, vec![leaper(2, 2)]),
        piece("Xiangqi Horse", Xiangqi, vec![knight()]),
        piece("Xiangqi Chariot", Xiangqi, vec![slides(&ORTHOGONAL)]),
        piece("Xiangqi Cannon", Xiangqi, vec![slides(&ORTHOGONAL)]),
        piece("Xiangqi Soldier", Xiangqi, vec![steps(&[FORWARD])]),
        piece(
            "Xiangqi Soldier Promoted",
            Xiangqi,
            vec![steps(&[FORWARD, LEFT, RIGHT])],
        ),
    ]
}

const GOLD: [Offset; 6] = [FORWARD, FORWARD_LEFT, FORWARD_RIGHT, LEFT, RIGHT, BACKWARD];
const SILVER: [Offset; 5] = [FORWARD, FORWARD_LEFT, FORWARD_RIGHT, BACKWARD_LEFT, BACKWARD_RIGHT];
const FORWARD_DIAGONALS: [Offset; 2] = [FORWARD_LEFT, FORWARD_RIGHT];
const BACKWARD_DIAGONALS: [Offset; 2] = [BACKWARD_LEFT, BACKWARD_RIGHT];
const SIDEWAYS: [Offset; 2] = [LEFT, RIGHT];
const VERTICAL: [Offset; 2] = [FORWARD, BACKWARD];

/// Alternative names resolved by exact lookup: `(alias, piece name)`.
/// `shogi_dragon` and `shogi_horse` are keyed by movement, the former
/// being the bishop-plus-wazir piece.
pub(super) const ALIASES: [(&str, &str); 6] = [
    ("shogi_gold", "Gold General"),
    ("shogi_silver", "Silver General"),
    ("shogi_dragon", "Dragon Horse"),
    ("shogi_horse", "Dragon King"),
    ("Keima", "Shogi Knight"),
    ("Lance", "Shogi Lance"),
];

pub(super) fn shogi_pieces() -> Vec<Piece> {
    use Category::Shogi;

    vec![
        // Standard shogi
        piece("Shogi Pawn", Shogi, vec![steps(&[FORWARD])]),
        piece("Shogi Lance", Shogi, vec![slides(&[FORWARD])]),
        piece("Shogi Knight", Shogi, vec![steps(&offsets(&[(2, 1), (2, -1)]))]),
        piece(
            "Silver General",
            Shogi,
            vec![steps(&SILVER)],
        ),
        piece("Gold General", Shogi, vec![steps(&GOLD)]),
        piece("Dragon King", Shogi, vec![slides(&ORTHOGONAL), steps(&DIAGONAL)]),
        piece("Dragon Horse", Shogi, vec![slides(&DIAGONAL), steps(&ORTHOGONAL)]),
        // Larger variants
        piece("Copper General", Shogi, vec![steps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT, BACKWARD])]),
        piece("Iron General", Shogi, vec![steps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT])]),
        piece("Stone General", Shogi, vec![steps(&[FORWARD_LEFT, FORWARD_RIGHT])]),
        piece("Tile General", Shogi, vec![steps(&[FORWARD_LEFT, FORWARD_RIGHT, BACKWARD])]),
        piece("Earth General", Shogi, vec![steps(&[FORWARD, BACKWARD])]),
        piece("Angry Boar", Shogi, vec![steps(&ORTHOGONAL)]),
        piece("Cat Sword", Shogi, vec![steps(&DIAGONAL)]),
        piece("Go Between", Shogi, vec![steps(&[FORWARD, BACKWARD])]),
        piece("Evil Wolf", Shogi, vec![steps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT, LEFT, RIGHT])]),
        piece("Drunk Elephant", Shogi, vec![steps(&all_but(&[BACKWARD]))]),
        piece("Blind Tiger", Shogi, vec![steps(&all_but(&[FORWARD]))]),
        piece("Ferocious Leopard", Shogi, vec![steps(&all_but(&[LEFT, RIGHT]))]),
        piece("Left General", Shogi, vec![steps(&all_but(&[LEFT]))]),
        piece("Right General", Shogi, vec![steps(&all_but(&[RIGHT]))]),
        piece("Free King", Shogi, vec![slides(&ALL_DIRECTIONS)]),
        piece("Reverse Chariot", Shogi, vec![slides(&[FORWARD, BACKWARD])]),
        piece("Side Mover", Shogi, vec![slides(&[LEFT, RIGHT]), steps(&[FORWARD, BACKWARD])]),
        piece("Vertical Mover", Shogi, vec![slides(&[FORWARD, BACKWARD]), steps(&[LEFT, RIGHT])]),
        piece("Flying Ox", Shogi, vec![slides(&all_but(&[LEFT, RIGHT]))]),
        piece("Free Boar", Shogi, vec![slides(&all_but(&[FORWARD, BACKWARD]))]),
        piece("Flying Stag", Shogi, vec![slides(&[FORWARD, BACKWARD]), king()]),
        piece("Whale", Shogi, vec![slides(&[FORWARD, BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT])]),
        piece("White Horse", Shogi, vec![slides(&[FORWARD, BACKWARD, FORWARD_LEFT, FORWARD_RIGHT])]),
        piece("Howling Dog", Shogi, vec![slides(&[FORWARD]), steps(&[BACKWARD])]),
        piece("Mountain Witch", Shogi, vec![steps(&[FORWARD]), slides(&[BACKWARD]), slides(&DIAGONAL)]),
        piece("Wizard Stork", Shogi, vec![steps(&[BACKWARD]), slides(&[FORWARD]), slides(&DIAGONAL)]),
        piece("Hook Mover", Shogi, vec![slides(&ORTHOGONAL)]),
        piece("Phoenix", Shogi, vec![steps(&ORTHOGONAL), jumps(&DIAGONAL, 2)]),
        piece("Kylin", Shogi, vec![steps(&DIAGONAL), jumps(&ORTHOGONAL, 2)]),
        piece("Flying Dragon", Shogi, vec![jumps(&DIAGONAL, 2)]),
        piece(
            "Goose",
            Shogi,
            vec![jumps(&[FORWARD_LEFT, FORWARD_RIGHT], 2), jumps(&[BACKWARD], 2)],
        ),
        piece(
            "Flying Cat",
            Shogi,
            vec![
                jumps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT], 3),
                steps(&[LEFT, RIGHT, BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT]),
            ],
        ),
        piece(
            "Heavenly Knight",
            Shogi,
            vec![steps(&offsets(&[(2, 1), (2, -1), (-2, 1), (-2, -1)]))],
        ),
        piece("Lion", Shogi, vec![lion()]),
        piece("Lion Dog", Shogi, vec![limited_slides(&ALL_DIRECTIONS, 3)]),
        piece("Leopard King", Shogi, vec![limited_slides(&ALL_DIRECTIONS, 5)]),
        piece("Guardian of the Gods", Shogi, vec![limited_slides(&ORTHOGONAL, 3)]),
        piece(
            "Horned Falcon",
            Shogi,
            vec![slides(&all_but(&[FORWARD])), steps(&[FORWARD]), jumps(&[FORWARD], 2)],
        ),
        piece(
            "Soaring Eagle",
            Shogi,
            vec![
                slides(&all_but(&[FORWARD_LEFT, FORWARD_RIGHT])),
                steps(&[FORWARD_LEFT, FORWARD_RIGHT]),
                jumps(&[FORWARD_LEFT, FORWARD_RIGHT], 2),
            ],
        ),
        piece("Violent Ox", Shogi, vec![limited_slides(&ORTHOGONAL, 2)]),
        piece("Flying Horse", Shogi, vec![limited_slides(&DIAGONAL, 2)]),
    ]
}

/// Pieces from dai, dai-dai, maka-dai-dai, tai and taikyoku shogi.
///
/// Hook moves and lion-style double moves are reduced to the straight legs
/// and jumps they cover, since every move here is a single offset.
pub(super) fn large_shogi_pieces() -> Vec<Piece> {
    use Category::Shogi;

    vec![
        piece("Angry Boar Taikyoku", Shogi, vec![limited_slides(&ORTHOGONAL, 2)]),
        piece("Bat", Shogi, vec![slides(&FORWARD_DIAGONALS), steps(&[BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT])]),
        piece("Bears Eyes", Shogi, vec![king()]),
        piece("Blind Bear", Shogi, vec![steps(&all_but(&VERTICAL))]),
        piece("Blind Monkey", Shogi, vec![steps(&all_but(&VERTICAL))]),
        piece(
            "Blue Dragon",
            Shogi,
            vec![slides(&[LEFT, RIGHT, BACKWARD, FORWARD_RIGHT]), limited_slides(&[FORWARD], 2)],
        ),
        piece("Buddhist Devil", Shogi, vec![slides(&FORWARD_DIAGONALS), steps(&[LEFT, RIGHT, BACKWARD])]),
        piece("Capricorn", Shogi, vec![slides(&DIAGONAL), leaper(2, 0)]),
        piece("Captive Officer", Shogi, vec![slides(&all_but(&[BACKWARD]))]),
        piece("Cavalryman", Shogi, vec![slides(&[FORWARD]), steps(&[BACKWARD])]),
        piece("Ceramic Dove", Shogi, vec![slides(&DIAGONAL), limited_slides(&ORTHOGONAL, 2)]),
        piece("Chinese Cock", Shogi, vec![steps(&[FORWARD_LEFT, FORWARD_RIGHT, LEFT, RIGHT, BACKWARD])]),
        piece(
            "Cloud Dragon",
            Shogi,
            vec![
                slides(&[FORWARD, BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT]),
                steps(&[LEFT, RIGHT, FORWARD_LEFT, FORWARD_RIGHT]),
            ],
        ),
        piece(
            "Cloud Eagle",
            Shogi,
            vec![
                slides(&VERTICAL),
                limited_slides(&FORWARD_DIAGONALS, 3),
                steps(&[LEFT, RIGHT, BACKWARD_LEFT, BACKWARD_RIGHT]),
            ],
        ),
        piece(
            "Cloud Eagle Taikyoku",
            Shogi,
            vec![
                slides(&VERTICAL),
                limited_slides(&FORWARD_DIAGONALS, 5),
                limited_slides(&BACKWARD_DIAGONALS, 2),
                steps(&SIDEWAYS),
            ],
        ),
        piece("Coiled Serpent", Shogi, vec![steps(&[FORWARD, BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT])]),
        piece("Crown Prince", Shogi, vec![king()]),
        piece("Dark Spirit", Shogi, vec![steps(&all_but(&[FORWARD, FORWARD_LEFT]))]),
        piece("Deva", Shogi, vec![steps(&all_but(&[FORWARD, FORWARD_RIGHT]))]),
        piece("Donkey", Shogi, vec![steps(&ORTHOGONAL), jumps(&ORTHOGONAL, 2)]),
        piece("Dove", Shogi, vec![limited_slides(&DIAGONAL, 5), limited_slides(&ORTHOGONAL, 2)]),
        piece(
            "Eagle",
            Shogi,
            vec![slides(&all_but(&FORWARD_DIAGONALS)), limited_slides(&FORWARD_DIAGONALS, 2)],
        ),
        piece(
            "East Barbarian",
            Shogi,
            vec![steps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT, BACKWARD]), limited_slides(&SIDEWAYS, 2)],
        ),
        piece("Enchanted Badger", Shogi, vec![limited_slides(&ORTHOGONAL, 2)]),
        piece("Enchanted Fox", Shogi, vec![leaper(2, 0), leaper(2, 2), steps(&VERTICAL)]),
        piece("Fierce Eagle", Shogi, vec![slides(&DIAGONAL), limited_slides(&SIDEWAYS, 2)]),
        piece(
            "Fire Dragon",
            Shogi,
            vec![
                slides(&[FORWARD_LEFT, FORWARD_RIGHT, BACKWARD]),
                limited_slides(&[LEFT, RIGHT, BACKWARD_LEFT, BACKWARD_RIGHT], 4),
            ],
        ),
        piece(
            "Fire General",
            Shogi,
            vec![slides(&[FORWARD]), limited_slides(&FORWARD_DIAGONALS, 3), steps(&[BACKWARD])],
        ),
        piece("Flying Cock", Shogi, vec![steps(&[FORWARD_LEFT, FORWARD_RIGHT, LEFT, RIGHT])]),
        piece("Flying Dragon Taikyoku", Shogi, vec![steps(&DIAGONAL), jumps(&DIAGONAL, 2)]),
        piece("Flying Swallow", Shogi, vec![slides(&[BACKWARD]), steps(&FORWARD_DIAGONALS)]),
        piece(
            "Forest Demon",
            Shogi,
            vec![
                slides(&[FORWARD, LEFT, RIGHT, BACKWARD_LEFT, BACKWARD_RIGHT]),
                limited_slides(&FORWARD_DIAGONALS, 3),
            ],
        ),
        piece("Fragrant Elephant", Shogi, vec![slides(&ALL_DIRECTIONS), leaper(2, 1)]),
        piece("Free Copper", Shogi, vec![slides(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT, BACKWARD])]),
        piece(
            "Free Demon",
            Shogi,
            vec![slides(&all_but(&VERTICAL)), limited_slides(&VERTICAL, 5)],
        ),
        piece(
            "Free Dream Eater",
            Shogi,
            vec![slides(&all_but(&SIDEWAYS)), limited_slides(&SIDEWAYS, 5)],
        ),
        piece("Free Earth", Shogi, vec![slides(&VERTICAL)]),
        piece("Free Gold", Shogi, vec![slides(&GOLD)]),
        piece("Free Iron", Shogi, vec![slides(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT])]),
        piece("Free Silver", Shogi, vec![slides(&SILVER)]),
        piece("Free Stone", Shogi, vec![slides(&FORWARD_DIAGONALS)]),
        piece("Free Tile", Shogi, vec![slides(&[FORWARD_LEFT, FORWARD_RIGHT, BACKWARD])]),
        piece("Furious Fiend", Shogi, vec![lion(), limited_slides(&ALL_DIRECTIONS, 3)]),
        piece(
            "Gold Chariot",
            Shogi,
            vec![slides(&VERTICAL), steps(&[FORWARD_LEFT, FORWARD_RIGHT, LEFT, RIGHT])],
        ),
        piece(
            "Golden Bird",
            Shogi,
            vec![
                slides(&VERTICAL),
                slides(&FORWARD_DIAGONALS),
                limited_slides(&SIDEWAYS, 3),
                limited_slides(&BACKWARD_DIAGONALS, 2),
            ],
        ),
        piece(
            "Golden Deer",
            Shogi,
            vec![slides(&FORWARD_DIAGONALS), limited_slides(&[BACKWARD], 2)],
        ),
        piece("Great Dove", Shogi, vec![slides(&DIAGONAL), limited_slides(&ORTHOGONAL, 3)]),
        piece("Great Dragon", Shogi, vec![slides(&all_but(&SIDEWAYS)), jumps(&SIDEWAYS, 3)]),
        piece("Great Dragon Tai", Shogi, vec![slides(&ALL_DIRECTIONS), jumps(&ORTHOGONAL, 3)]),
        piece(
            "Great Dream Eater",
            Shogi,
            vec![slides(&all_but(&SIDEWAYS)), limited_slides(&SIDEWAYS, 5), jumps(&ORTHOGONAL, 2)],
        ),
        piece(
            "Great Elephant",
            Shogi,
            vec![
                slides(&[LEFT, RIGHT, BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT]),
                limited_slides(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT], 3),
            ],
        ),
        piece(
            "Guardian of the Gods Taikyoku",
            Shogi,
            vec![limited_slides(&ORTHOGONAL, 3), steps(&DIAGONAL)],
        ),
        piece(
            "Heavenly Tetrarch Taikyoku",
            Shogi,
            vec![jumps(&all_but(&SIDEWAYS), 2), limited_slides(&SIDEWAYS, 4)],
        ),
        piece("Kirin Master", Shogi, vec![limited_slides(&ALL_DIRECTIONS, 3), jumps(&ORTHOGONAL, 3)]),
        piece(
            "Left Chariot",
            Shogi,
            vec![slides(&[FORWARD, BACKWARD, FORWARD_LEFT, BACKWARD_RIGHT]), steps(&[LEFT])],
        ),
        piece("Long Nosed Goblin", Shogi, vec![slides(&DIAGONAL), steps(&ORTHOGONAL)]),
        piece(
            "Mountain Dove",
            Shogi,
            vec![limited_slides(&FORWARD_DIAGONALS, 5), steps(&[LEFT, RIGHT, BACKWARD])],
        ),
        piece(
            "Mountain General",
            Shogi,
            vec![limited_slides(&FORWARD_DIAGONALS, 3), steps(&VERTICAL)],
        ),
        piece("Multi General", Shogi, vec![slides(&[FORWARD, BACKWARD_LEFT, BACKWARD_RIGHT])]),
        piece("Neighbouring King", Shogi, vec![steps(&all_but(&[FORWARD]))]),
        piece(
            "North Barbarian",
            Shogi,
            vec![steps(&[FORWARD, BACKWARD_LEFT, BACKWARD_RIGHT]), limited_slides(&FORWARD_DIAGONALS, 2)],
        ),
        piece(
            "South Barbarian",
            Shogi,
            vec![steps(&[FORWARD_LEFT, FORWARD_RIGHT, BACKWARD]), limited_slides(&[FORWARD], 2)],
        ),
        piece(
            "West Barbarian",
            Shogi,
            vec![steps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT, LEFT, RIGHT]), jumps(&[FORWARD], 2)],
        ),
        piece("Old Kite", Shogi, vec![limited_slides(&SIDEWAYS, 2), steps(&DIAGONAL)]),
        piece("Old Kite Hawk", Shogi, vec![limited_slides(&SIDEWAYS, 2), limited_slides(&DIAGONAL, 2)]),
        piece("Old Monkey", Shogi, vec![steps(&DIAGONAL), steps(&[BACKWARD])]),
        piece("Old Rat", Shogi, vec![steps(&[FORWARD, BACKWARD_LEFT, BACKWARD_RIGHT])]),
        piece(
            "Phoenix Master",
            Shogi,
            vec![slides(&all_but(&BACKWARD_DIAGONALS)), jumps(&BACKWARD_DIAGONALS, 3)],
        ),
        piece(
            "Poison Snake",
            Shogi,
            vec![steps(&[FORWARD, BACKWARD_LEFT, BACKWARD_RIGHT]), jumps(&[FORWARD], 2)],
        ),
        piece(
            "Prancing Stag",
            Shogi,
            vec![slides(&SIDEWAYS), steps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT, BACKWARD_LEFT, BACKWARD_RIGHT])],
        ),
        piece("Racing Chariot", Shogi, vec![slides(&VERTICAL), steps(&SIDEWAYS)]),
        piece(
            "Rain Dragon",
            Shogi,
            vec![slides(&[LEFT, RIGHT, BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT]), steps(&FORWARD_DIAGONALS)],
        ),
        piece("Ramshead Soldier", Shogi, vec![slides(&FORWARD_DIAGONALS), steps(&[BACKWARD])]),
        piece(
            "Ramshead Soldier Taikyoku",
            Shogi,
            vec![slides(&FORWARD_DIAGONALS), steps(&[BACKWARD, BACKWARD_LEFT, BACKWARD_RIGHT])],
        ),
        piece("Reclining Dragon", Shogi, vec![steps(&ORTHOGONAL)]),
        piece(
            "Right Chariot",
            Shogi,
            vec![slides(&[FORWARD, BACKWARD, FORWARD_RIGHT, BACKWARD_LEFT]), steps(&[RIGHT])],
        ),
        piece(
            "Running Wolf",
            Shogi,
            vec![slides(&SIDEWAYS), steps(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT])],
        ),
        piece(
            "Rushing Bird",
            Shogi,
            vec![limited_slides(&[FORWARD], 2), steps(&[LEFT, RIGHT, FORWARD_LEFT, FORWARD_RIGHT])],
        ),
        piece("Savage Tiger", Shogi, vec![slides(&[FORWARD]), steps(&all_but(&[FORWARD]))]),
        piece("She Devil", Shogi, vec![slides(&DIAGONAL), limited_slides(&ORTHOGONAL, 5)]),
        piece("Side Dragon", Shogi, vec![slides(&[FORWARD, LEFT, RIGHT])]),
        piece(
            "Side Dragon Taikyoku",
            Shogi,
            vec![slides(&[FORWARD, LEFT, RIGHT]), steps(&BACKWARD_DIAGONALS)],
        ),
        piece("Side Mover Heian Dai", Shogi, vec![slides(&SIDEWAYS), steps(&[FORWARD])]),
        piece(
            "Side Serpent",
            Shogi,
            vec![slides(&SIDEWAYS), limited_slides(&[FORWARD], 3), steps(&[BACKWARD])],
        ),
        piece(
            "Side Soldier",
            Shogi,
            vec![slides(&SIDEWAYS), limited_slides(&[FORWARD], 2), steps(&[BACKWARD])],
        ),
        piece(
            "Silver Chariot",
            Shogi,
            vec![
                slides(&VERTICAL),
                limited_slides(&FORWARD_DIAGONALS, 2),
                steps(&BACKWARD_DIAGONALS),
            ],
        ),
        piece("Silver Hare", Shogi, vec![limited_slides(&DIAGONAL, 2), steps(&VERTICAL)]),
        piece("Square Mover", Shogi, vec![slides(&ORTHOGONAL), steps(&DIAGONAL)]),
        piece(
            "Standard Bearer",
            Shogi,
            vec![slides(&[FORWARD, FORWARD_LEFT, FORWARD_RIGHT]), limited_slides(&[LEFT, RIGHT, BACKWARD], 2)],
        ),
        piece("Strutting Crow", Shogi, vec![steps(&[FORWARD, BACKWARD_LEFT, BACKWARD_RIGHT])]),
        piece("Tokin", Shogi, vec![steps(&GOLD)]),
        piece(
            "Treacherous Fox",
            Shogi,
            vec![
                steps(&all_but(&SIDEWAYS)),
                jumps(&all_but(&SIDEWAYS), 2),
                jumps(&all_but(&SIDEWAYS), 3),
            ],
        ),
        piece(
            "Vertical Soldier",
            Shogi,
            vec![slides(&[FORWARD]), limited_slides(&SIDEWAYS, 2), steps(&[BACKWARD])],
        ),
        piece("Violent Bear", Shogi, vec![limited_slides(&FORWARD_DIAGONALS, 2), steps(&SIDEWAYS)]),
        piece(
            "Water Buffalo",
            Shogi,
            vec![slides(&all_but(&VERTICAL)), limited_slides(&VERTICAL, 2)],
        ),
        piece(
            "Water Dragon",
            Shogi,
            vec![
                slides(&[LEFT, RIGHT, FORWARD_LEFT, FORWARD_RIGHT]),
                limited_slides(&BACKWARD_DIAGONALS, 4),
            ],
        ),
        piece(
            "Water General",
            Shogi,
            vec![slides(&FORWARD_DIAGONALS), limited_slides(&VERTICAL, 3)],
        ),
        piece("White Elephant", Shogi, vec![limited_slides(&ALL_DIRECTIONS, 2)]),
        piece(
            "White Elephant Taikyoku",
            Shogi,
            vec![limited_slides(&ALL_DIRECTIONS, 2), jumps(&ALL_DIRECTIONS, 3)],
        ),
        piece(
            "White Tiger",
            Shogi,
            vec![slides(&[LEFT, RIGHT, FORWARD_LEFT]), limited_slides(&VERTICAL, 2)],
        ),
        piece("Wind Dragon", Shogi, vec![slides(&all_but(&[FORWARD, BACKWARD_RIGHT])), steps(&[FORWARD])]),
        piece("Wood General", Shogi, vec![limited_slides(&FORWARD_DIAGONALS, 2)]),
        piece("Wrestler", Shogi, vec![limited_slides(&DIAGONAL, 3), steps(&SIDEWAYS)]),
        piece("Wrestler Taikyoku", Shogi, vec![limited_slides(&all_but(&VERTICAL), 3)]),
        piece(
            "Yaksha",
            Shogi,
            vec![slides(&SIDEWAYS), limited_slides(&[BACKWARD], 4), steps(&FORWARD_DIAGONALS)],
        ),
    ]
}
