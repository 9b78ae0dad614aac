//!
//! Bidirectional index between open grid cells and dense state ids
//!
use crate::common::{Coord, StateId};
use crate::grid::GridWorld;
use fnv::FnvHashMap;

///
/// `StateIndex` maps each open cell to `0..n_states` and back.
///
/// Ids are assigned by a row-major scan (`y` outer, `x` inner, both
/// ascending), so the mapping is a deterministic function of the grid.
///
#[derive(Debug, Clone)]
pub struct StateIndex {
    coords: Vec<Coord>,
    ids: FnvHashMap<Coord, StateId>,
}

impl StateIndex {
    pub fn from_grid<G: GridWorld>(grid: &G) -> StateIndex {
        let mut coords = Vec::new();
        let mut ids = FnvHashMap::default();
        for y in 0..grid.height() as i64 {
            for x in 0..grid.width() as i64 {
                if grid.is_open(x, y) {
                    let c = Coord::new(x, y);
                    ids.insert(c, coords.len());
                    coords.push(c);
                }
            }
        }
        StateIndex { coords, ids }
    }
    pub fn n_states(&self) -> usize {
        self.coords.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    ///
    /// Coordinate of the state.
    /// Panics if `id >= n_states`.
    ///
    pub fn coord(&self, id: StateId) -> Coord {
        self.coords[id]
    }
    pub fn get_coord(&self, id: StateId) -> Option<Coord> {
        self.coords.get(id).copied()
    }
    ///
    /// State of the coordinate, `None` for walls or cells outside the grid.
    ///
    pub fn state(&self, coord: Coord) -> Option<StateId> {
        self.ids.get(&coord).copied()
    }
    /// iterator of `(StateId, Coord)` in id order
    pub fn iter(&self) -> impl Iterator<Item = (StateId, Coord)> + '_ {
        self.coords.iter().copied().enumerate()
    }
}
