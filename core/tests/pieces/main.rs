use heatmap_core::pieces::movement::{FORWARD, expand_offsets, slides};
use heatmap_core::{Bounds, Category, Offset, PieceLookup, catalog};

fn board(size: i32) -> Bounds {
    Bounds::square(size).unwrap()
}

#[test]
fn test_catalog_names_are_sorted_and_unique() {
    let names = catalog().names();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();

    assert_eq!(names, sorted);
    assert_eq!(catalog().len(), names.len());
}

#[test]
fn test_every_category_has_pieces() {
    for category in Category::ALL {
        assert!(!catalog().by_category(category).is_empty(), "{}", category.as_str());
    }
}

#[test]
fn test_standard_piece_offset_counts() {
    let bounds = board(8);
    let count = |name: &str| catalog().get(name).unwrap().offsets(bounds).len();

    assert_eq!(count("knight"), 8);
    assert_eq!(count("king"), 8);
    assert_eq!(count("rook"), 28);
    assert_eq!(count("bishop"), 28);
    assert_eq!(count("queen"), 56);
    assert_eq!(count("pawn"), 1);
    assert_eq!(count("amazon"), 64);
}

#[test]
fn test_sliders_scale_with_board_size() {
    let rook = catalog().get("rook").unwrap();

    assert_eq!(rook.offsets(board(8)).len(), 28);
    assert_eq!(rook.offsets(board(12)).len(), 44);
    assert_eq!(rook.max_range(board(12)), 11);
}

#[test]
fn test_lookup_normalizes_names() {
    for query in ["Flying Ox", "flying-ox", "FLYING_OX", "  flying   ox "] {
        match catalog().lookup(query) {
            PieceLookup::Found(piece) => assert_eq!(piece.name, "Flying Ox"),
            other => panic!("{} resolved to {:?}", query, other),
        }
    }
}

#[test]
fn test_lookup_accepts_unique_partial_names() {
    match catalog().lookup("nightrid") {
        PieceLookup::Found(piece) => assert_eq!(piece.name, "Nightrider"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_lookup_reports_ambiguity() {
    match catalog().lookup("dragon") {
        PieceLookup::Ambiguous(names) => {
            assert!(names.contains(&"Dragon King"));
            assert!(names.contains(&"Dragon Horse"));
            assert!(names.contains(&"Flying Dragon"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_lookup_unknown_piece() {
    assert_eq!(catalog().lookup("spaceship"), PieceLookup::NotFound);
    assert_eq!(catalog().lookup(""), PieceLookup::NotFound);
}

#[test]
fn test_exact_match_beats_partial_match() {
    // "lion" is also a substring of "Lion Dog"
    match catalog().lookup("lion") {
        PieceLookup::Found(piece) => assert_eq!(piece.name, "Lion"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let names: Vec<&str> = catalog().search("GENERAL").iter().map(|piece| piece.name).collect();

    assert!(names.contains(&"Gold General"));
    assert!(names.contains(&"Xiangqi General"));
    assert!(!names.contains(&"Knight"));
}

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("Shogi"), Some(Category::Shogi));
    assert_eq!(Category::parse("fairy"), Some(Category::Fairy));
    assert_eq!(Category::parse("checkers"), None);
}

#[test]
fn test_asymmetric_pieces_point_forward() {
    let bounds = board(9);
    let gold = catalog().get("gold general").unwrap().offsets(bounds);
    let lance = catalog().get("shogi lance").unwrap().offsets(bounds);

    assert!(gold.contains(&Offset::new(1, 1)));
    assert!(!gold.contains(&Offset::new(-1, 1)));
    assert!(lance.iter().all(|offset| offset.row > 0 && offset.col == 0));
    assert_eq!(lance, expand_offsets(&slides(&[FORWARD]), bounds));
}

#[test]
fn test_grasshopper_skips_adjacent_squares() {
    let offsets = catalog().get("grasshopper").unwrap().offsets(board(8));

    assert!(!offsets.contains(&Offset::new(1, 0)));
    assert!(offsets.contains(&Offset::new(2, 0)));
    assert!(offsets.contains(&Offset::new(-7, 7)));
}

#[test]
fn test_limited_range_pieces() {
    let bounds = board(12);
    let leopard_king = catalog().get("leopard king").unwrap();
    let lion_dog = catalog().get("lion dog").unwrap();

    assert_eq!(leopard_king.max_range(bounds), 5);
    assert_eq!(leopard_king.offsets(bounds).len(), 40);
    assert_eq!(lion_dog.offsets(bounds).len(), 24);
}

const LARGE_SHOGI_NAMES: [&str; 156] = [
    "Angry-Boar", "Angry-Boar-Taikyoku", "Bat", "Bears-Eyes", "Bishop", "Blind-Bear",
    "Blind-Monkey", "Blind-Tiger", "Blue-Dragon", "Buddhist-Devil", "Cavalryman", "Capricorn",
    "Captive-Officer", "Cat-Sword", "Ceramic-Dove", "Chinese-Cock", "Cloud-Dragon",
    "Cloud-Eagle", "Cloud-Eagle-Taikyoku", "Coiled-Serpent", "Copper-General", "Crown-Prince",
    "Dark-Spirit", "Deva", "Donkey", "Dove", "Dragon-Horse", "Dragon-King", "Drunk-Elephant",
    "Eagle", "Earth-General", "East-Barbarian", "Enchanted-Badger", "Enchanted-Fox",
    "Evil-Wolf", "Ferocious-Leopard", "Fierce-Eagle", "Fire-Dragon", "Fire-General",
    "Flying-Cat", "Flying-Cock", "Flying-Dragon", "Flying-Dragon-Taikyoku", "Flying-Horse",
    "Flying-Ox", "Flying-Stag", "Flying-Swallow", "Forest-Demon", "Fragrant-Elephant",
    "Free-Boar", "Free-Copper", "Free-Demon", "Free-Dream-Eater", "Free-Earth", "Free-Gold",
    "Free-Iron", "Free-King", "Free-Silver", "Free-Stone", "Free-Tile", "Furious-Fiend",
    "Go-Between", "Gold-Chariot", "Golden-Bird", "Golden-Deer", "Gold-General", "Goose",
    "Great-Dove", "Great-Dragon", "Great-Dragon-Tai", "Great-Dream-Eater", "Great-Elephant",
    "Guardian-of-the-Gods", "Guardian-of-the-Gods-Taikyoku", "Heavenly-Knight",
    "Heavenly-Tetrarch-Taikyoku", "Hook-Mover", "Horned-Falcon", "Howling-Dog", "Iron-General",
    "Keima", "King", "Kirin-Master", "Kylin", "Lance", "Left-Chariot", "Left-General",
    "Leopard-King", "Lion", "Lion-Dog", "Long-Nosed-Goblin", "Mountain-Dove",
    "Mountain-General", "Mountain-Witch", "Multi-General", "Neighbouring-King",
    "North-Barbarian", "Old-Kite", "Old-Kite-Hawk", "Old-Monkey", "Old-Rat", "Pawn", "Phoenix",
    "Phoenix-Master", "Poison-Snake", "Prancing-Stag", "Racing-Chariot", "Rain-Dragon",
    "Ramshead-Soldier", "Ramshead-Soldier-Taikyoku", "Reclining-Dragon", "Reverse-Chariot",
    "Right-Chariot", "Right-General", "Rook", "Running-Wolf", "Rushing-Bird", "Savage-Tiger",
    "She-Devil", "Side-Dragon", "Side-Dragon-Taikyoku", "Side-Mover", "Side-Mover-Heian-dai",
    "Side-Serpent", "Side-Soldier", "Silver-Chariot", "Silver-General", "Silver-Hare",
    "Soaring-Eagle", "South-Barbarian", "Square-Mover", "Standard-Bearer", "Stone-General",
    "Strutting-Crow", "Tile-General", "Tokin", "Treacherous-Fox", "Vertical-Mover",
    "Vertical-Soldier", "Violent-Bear", "Violent-Ox", "Water-Buffalo", "Water-Dragon",
    "Water-General", "West-Barbarian", "Whale", "White-Elephant", "White-Elephant-Taikyoku",
    "White-Horse", "White-Tiger", "Wind-Dragon", "Wizard-Stork", "Wood-General", "Wrestler",
    "Wrestler-Taikyoku", "Yaksha",
];

#[test]
fn test_every_large_shogi_name_resolves() {
    for name in LARGE_SHOGI_NAMES {
        assert!(
            matches!(catalog().lookup(name), PieceLookup::Found(_)),
            "{} did not resolve",
            name
        );
    }
}

#[test]
fn test_aliases_resolve_to_matching_movement() {
    let resolve = |name: &str| match catalog().lookup(name) {
        PieceLookup::Found(piece) => piece.name,
        other => panic!("{} resolved to {:?}", name, other),
    };

    assert_eq!(resolve("shogi_gold"), "Gold General");
    assert_eq!(resolve("shogi_silver"), "Silver General");
    assert_eq!(resolve("shogi_dragon"), "Dragon Horse");
    assert_eq!(resolve("shogi_horse"), "Dragon King");
    assert_eq!(resolve("Keima"), "Shogi Knight");
    assert_eq!(resolve("lance"), "Shogi Lance");
}

#[test]
fn test_aliases_stay_out_of_listings() {
    let names = catalog().names();

    assert!(!names.contains(&"Keima"));
    assert_eq!(names.len(), catalog().len());
    assert!(catalog().len() > LARGE_SHOGI_NAMES.len());
}

#[test]
fn test_large_shogi_pieces_move() {
    let bounds = board(12);
    for name in LARGE_SHOGI_NAMES {
        let PieceLookup::Found(piece) = catalog().lookup(name) else {
            panic!("{} did not resolve", name);
        };
        assert!(!piece.offsets(bounds).is_empty(), "{} has no moves", name);
    }
}

#[test]
fn test_lion_family_combines_jumps_and_ranges() {
    let bounds = board(12);
    let fiend = catalog().get("furious fiend").unwrap().offsets(bounds);

    assert!(fiend.contains(&Offset::new(2, 1)));
    assert!(fiend.contains(&Offset::new(3, 3)));
    assert!(!fiend.contains(&Offset::new(4, 0)));
    assert_eq!(
        catalog().get("tokin").unwrap().offsets(bounds),
        catalog().get("gold general").unwrap().offsets(bounds)
    );
}
