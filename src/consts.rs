//! Constants for the 9×9 grid geometry.

pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: usize = 27;
pub(crate) const N_NEIGHBORS: usize = 20;
