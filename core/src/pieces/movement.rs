use crate::grid::{Bounds, Offset};
use rustc_hash::FxHashSet;

/// One movement capability of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// A single jump by a fixed displacement.
    Leap(Offset),
    /// Repeated steps along one line, from `min` steps up to `limit` steps
    /// (or the far edge of the board when unlimited). Every distance becomes
    /// its own jump; intervening cells never block.
    Slide {
        step: Offset,
        min: i32,
        limit: Option<i32>,
    },
}

impl Movement {
    pub fn range(&self, bounds: Bounds) -> i32 {
        match *self {
            Movement::Leap(offset) => offset.range(),
            Movement::Slide { step, min, limit } => {
                let steps = slide_steps(step, min, limit, bounds);
                if steps.is_empty() {
                    0
                } else {
                    step.scaled(*steps.end()).range()
                }
            }
        }
    }

    fn push_offsets(&self, bounds: Bounds, out: &mut Vec<Offset>) {
        match *self {
            Movement::Leap(offset) => out.push(offset),
            Movement::Slide { step, min, limit } => {
                out.extend(slide_steps(step, min, limit, bounds).map(|k| step.scaled(k)));
            }
        }
    }
}

fn slide_steps(step: Offset, min: i32, limit: Option<i32>, bounds: Bounds) -> std::ops::RangeInclusive<i32> {
    let step_len = step.range().max(1);
    let board_limit = bounds.max_extent() / step_len;
    let max = limit.map_or(board_limit, |limit| limit.min(board_limit));
    min.max(1)..=max
}

/// Expands movements into the concrete offsets usable on `bounds`, keeping
/// first-seen order and dropping duplicates.
pub fn expand_offsets(movements: &[Movement], bounds: Bounds) -> Vec<Offset> {
    let mut raw = Vec::new();
    for movement in movements {
        movement.push_offsets(bounds, &mut raw);
    }

    let mut seen = FxHashSet::default();
    raw.retain(|offset| seen.insert(*offset));
    raw
}

pub const FORWARD: Offset = Offset::new(1, 0);
pub const BACKWARD: Offset = Offset::new(-1, 0);
pub const LEFT: Offset = Offset::new(0, -1);
pub const RIGHT: Offset = Offset::new(0, 1);
pub const FORWARD_LEFT: Offset = Offset::new(1, -1);
pub const FORWARD_RIGHT: Offset = Offset::new(1, 1);
pub const BACKWARD_LEFT: Offset = Offset::new(-1, -1);
pub const BACKWARD_RIGHT: Offset = Offset::new(-1, 1);

pub const ORTHOGONAL: [Offset; 4] = [FORWARD, BACKWARD, LEFT, RIGHT];
pub const DIAGONAL: [Offset; 4] = [FORWARD_LEFT, FORWARD_RIGHT, BACKWARD_LEFT, BACKWARD_RIGHT];
pub const ALL_DIRECTIONS: [Offset; 8] = [
    FORWARD,
    BACKWARD,
    LEFT,
    RIGHT,
    FORWARD_LEFT,
    FORWARD_RIGHT,
    BACKWARD_LEFT,
    BACKWARD_RIGHT,
];

/// All eight reflections of an `(a, b)` leaper, deduplicated.
pub fn leaper(a: i32, b: i32) -> Vec<Movement> {
    symmetric(a, b).into_iter().map(Movement::Leap).collect()
}

/// Unlimited rider along all reflections of `(a, b)`.
pub fn rider(a: i32, b: i32) -> Vec<Movement> {
    symmetric(a, b)
        .into_iter()
        .map(|step| Movement::Slide {
            step,
            min: 1,
            limit: None,
        })
        .collect()
}

pub fn steps(directions: &[Offset]) -> Vec<Movement> {
    directions.iter().copied().map(Movement::Leap).collect()
}

pub fn jumps(directions: &[Offset], distance: i32) -> Vec<Movement> {
    directions
        .iter()
        .map(|direction| Movement::Leap(direction.scaled(distance)))
        .collect()
}

pub fn slides(directions: &[Offset]) -> Vec<Movement> {
    ranged_slides(directions, None)
}

pub fn limited_slides(directions: &[Offset], limit: i32) -> Vec<Movement> {
    ranged_slides(directions, Some(limit))
}

fn ranged_slides(directions: &[Offset], limit: Option<i32>) -> Vec<Movement> {
    directions
        .iter()
        .map(|&step| Movement::Slide { step, min: 1, limit })
        .collect()
}

fn symmetric(a: i32, b: i32) -> Vec<Offset> {
    let mut offsets = Vec::with_capacity(8);
    for (x, y) in [(a, b), (b, a)] {
        for (sx, sy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            let offset = Offset::new(x * sx, y * sy);
            if !offsets.contains(&offset) {
                offsets.push(offset);
            }
        }
    }
    offsets
}
