//! Broad-phase neighbor search
//!
//! Uniform grid over the world rectangle with cells as wide as the support
//! radius, so every pair closer than `h` sits in the same or an adjacent cell.

use bevy::prelude::{IVec2, UVec2};

use crate::core::Particle;
use crate::math::{Real, Vector};

/// 3x3 neighborhood, center included
static NEIGHBOR_OFFSETS: [IVec2; 9] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(0, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

#[derive(Clone, Debug)]
pub struct SpatialHashGrid {
    cell_size: Real,
    origin: Vector,
    dimensions: UVec2,
    cells: Vec<Vec<usize>>,
    indexed: usize,
}

impl SpatialHashGrid {
    /// Grid covering `[min, max]` with square cells of `cell_size`.
    pub fn new(cell_size: Real, min: Vector, max: Vector) -> Self {
        let extent = (max - min).max(Vector::ZERO);
        let columns = ((extent.x / cell_size).ceil() as u32).max(1);
        let rows = ((extent.y / cell_size).ceil() as u32).max(1);

        Self {
            cell_size,
            origin: min,
            dimensions: UVec2::new(columns, rows),
            cells: vec![Vec::new(); (columns * rows) as usize],
            indexed: 0,
        }
    }

    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    pub fn dimensions(&self) -> UVec2 {
        self.dimensions
    }

    /// Number of particles inserted by the last rebuild
    pub fn len(&self) -> usize {
        self.indexed
    }

    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }

    /// Unclamped cell coordinate, `floor((position - origin) / h)`
    #[inline]
    pub fn cell_coord(&self, position: Vector) -> IVec2 {
        ((position - self.origin) / self.cell_size).floor().as_ivec2()
    }

    /// Cell coordinate clipped into the grid. Non-finite positions land in cell 0.
    #[inline]
    pub fn clamped_cell(&self, position: Vector) -> IVec2 {
        let max = self.dimensions.as_ivec2() - IVec2::ONE;
        self.cell_coord(position).clamp(IVec2::ZERO, max)
    }

    #[inline]
    fn linear_index(&self, coord: IVec2) -> Option<usize> {
        let in_bounds = coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.dimensions.x
            && (coord.y as u32) < self.dimensions.y;
        in_bounds.then(|| coord.y as usize * self.dimensions.x as usize + coord.x as usize)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.indexed = 0;
    }

    /// Drops every previous bucket and inserts particle `i` into its cell.
    pub fn rebuild(&mut self, particles: &[Particle]) {
        self.clear();
        for (index, particle) in particles.iter().enumerate() {
            let coord = self.clamped_cell(particle.position);
            if let Some(linear) = self.linear_index(coord) {
                self.cells[linear].push(index);
            }
        }
        self.indexed = particles.len();
    }

    /// Candidate neighbors of particle `index` at `position`: everything in the
    /// surrounding 3x3 cells except `index` itself. Callers still filter by
    /// exact distance.
    pub fn neighbors_of(&self, index: usize, position: Vector) -> impl Iterator<Item = usize> + '_ {
        let center = self.clamped_cell(position);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |offset| self.linear_index(center + *offset))
            .flat_map(move |linear| self.cells[linear].iter().copied())
            .filter(move |&other| other != index)
    }
}
