use crate::grid::{Bounds, Cell};
use serde::ser::{Serialize, SerializeStruct, Serializer};

pub const UNREACHABLE: i32 = -1;
pub const OBSTACLE: i32 = -2;

/// Minimum move counts from a start cell, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    bounds: Bounds,
    start: Cell,
    values: Vec<i32>,
}

impl DistanceField {
    pub(crate) fn new(bounds: Bounds, start: Cell) -> Self {
        Self {
            bounds,
            start,
            values: vec![UNREACHABLE; bounds.cell_count()],
        }
    }

    pub(crate) fn set(&mut self, cell: Cell, value: i32) {
        if let Some(index) = self.bounds.index(cell) {
            self.values[index] = value;
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    /// Raw value at `cell`; cells off the board read as [`UNREACHABLE`].
    pub fn get(&self, cell: Cell) -> i32 {
        self.bounds
            .index(cell)
            .map_or(UNREACHABLE, |index| self.values[index])
    }

    pub fn at(&self, row: i32, col: i32) -> i32 {
        self.get(Cell::new(row, col))
    }

    pub fn distance(&self, cell: Cell) -> Option<u32> {
        u32::try_from(self.get(cell)).ok()
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.get(cell) == OBSTACLE
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.values.chunks(self.bounds.cols() as usize)
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, i32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| (self.bounds.cell_at(index), value))
    }

    pub fn reachable_count(&self) -> usize {
        self.values.iter().filter(|&&value| value >= 0).count()
    }

    pub fn obstacle_count(&self) -> usize {
        self.values.iter().filter(|&&value| value == OBSTACLE).count()
    }

    /// Largest finite distance, i.e. the index of the last BFS layer.
    pub fn max_distance(&self) -> Option<u32> {
        self.values
            .iter()
            .filter_map(|&value| u32::try_from(value).ok())
            .max()
    }

    /// Cells sharing the distance `layer`, in row-major order.
    pub fn layer(&self, layer: u32) -> Vec<Cell> {
        self.cells()
            .filter(|&(_, value)| u32::try_from(value).ok() == Some(layer))
            .map(|(cell, _)| cell)
            .collect()
    }
}

impl Serialize for DistanceField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DistanceField", 3)?;
        state.serialize_field("bounds", &self.bounds)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("rows", &self.to_rows())?;
        state.end()
    }
}
