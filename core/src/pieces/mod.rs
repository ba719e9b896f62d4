mod definitions;
pub mod movement;

use crate::grid::{Bounds, Offset};
use crate::string_normalization::piece_key;
use movement::{Movement, expand_offsets};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Standard,
    Fairy,
    Xiangqi,
    Shogi,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Standard,
        Category::Fairy,
        Category::Xiangqi,
        Category::Shogi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Fairy => "fairy",
            Category::Xiangqi => "xiangqi",
            Category::Shogi => "shogi",
        }
    }

    pub fn parse(name: &str) -> Option<Category> {
        let name = name.trim().to_lowercase();
        Category::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

#[derive(Debug, Clone)]
pub struct Piece {
    pub name: &'static str,
    pub category: Category,
    pub movements: Vec<Movement>,
}

impl Piece {
    /// Concrete offsets for this piece on a board of the given size.
    pub fn offsets(&self, bounds: Bounds) -> Vec<Offset> {
        expand_offsets(&self.movements, bounds)
    }

    pub fn max_range(&self, bounds: Bounds) -> i32 {
        self.movements
            .iter()
            .map(|movement| movement.range(bounds))
            .max()
            .unwrap_or(0)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Piece {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceLookup<'a> {
    Found(&'a Piece),
    Ambiguous(Vec<&'static str>),
    NotFound,
}

pub struct PieceCatalog {
    pieces: Vec<Piece>,
    by_key: FxHashMap<String, usize>,
}

impl PieceCatalog {
    fn build() -> Self {
        let mut pieces: Vec<Piece> = definitions::standard_pieces()
            .into_iter()
            .chain(definitions::fairy_pieces())
            .chain(definitions::xiangqi_pieces())
            .chain(definitions::shogi_pieces())
            .chain(definitions::large_shogi_pieces())
            .collect();
        pieces.sort_by_key(|piece| piece.name);

        let mut by_key: FxHashMap<String, usize> = pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| (piece_key(piece.name), index))
            .collect();

        for (alias, name) in definitions::ALIASES {
            if let Some(&index) = by_key.get(&piece_key(name)) {
                by_key.entry(piece_key(alias)).or_insert(index);
            }
        }

        Self { pieces, by_key }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// All pieces, sorted by name.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.pieces.iter().map(|piece| piece.name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Piece> {
        self.by_key
            .get(&piece_key(name))
            .map(|&index| &self.pieces[index])
    }

    /// Exact match on the normalized name first, then a unique partial match.
    pub fn lookup(&self, query: &str) -> PieceLookup<'_> {
        if let Some(piece) = self.get(query) {
            return PieceLookup::Found(piece);
        }

        let matches = self.search(query);
        match matches.as_slice() {
            [] => PieceLookup::NotFound,
            [only] => PieceLookup::Found(*only),
            _ => PieceLookup::Ambiguous(matches.iter().map(|piece| piece.name).collect()),
        }
    }

    /// Pieces whose normalized name contains `term`.
    pub fn search(&self, term: &str) -> Vec<&Piece> {
        let term = piece_key(term);
        if term.is_empty() {
            return Vec::new();
        }

        self.pieces
            .iter()
            .filter(|piece| piece_key(piece.name).contains(&term))
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Piece> {
        self.pieces
            .iter()
            .filter(|piece| piece.category == category)
            .collect()
    }
}

/// Process-wide catalog, built on first use.
pub fn catalog() -> &'static PieceCatalog {
    static CATALOG: OnceLock<PieceCatalog> = OnceLock::new();
    CATALOG.get_or_init(PieceCatalog::build)
}
