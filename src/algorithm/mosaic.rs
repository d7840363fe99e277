//! Nearest-seed (Voronoi) color quantization
//!
//! A fixed number of distinct pixels are drawn at random as seeds. Every pixel
//! then takes the color of the seed closest to it in the image plane, which
//! partitions the image into flat Voronoi cells.

use rand::Rng;
use std::collections::HashSet;

use crate::io::error::{Result, invalid_argument};
use crate::spatial::{CoordinateSet, PixelGrid, Rgb};

/// A sampled pixel and the color it spreads to its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    /// Row of the sampled pixel
    pub row: usize,
    /// Column of the sampled pixel
    pub col: usize,
    /// Original color at the sampled position
    pub color: Rgb,
}

impl Seed {
    /// Squared Euclidean distance from this seed to `(row, col)`
    pub const fn distance_squared(&self, row: usize, col: usize) -> usize {
        let dr = self.row.abs_diff(row);
        let dc = self.col.abs_diff(col);
        dr * dr + dc * dc
    }
}

/// Seeds with distinct positions, kept in the order they were drawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    seeds: Vec<Seed>,
}

impl SeedSet {
    /// Draw up to `count` distinct pixels of `grid` uniformly at random
    ///
    /// `count` is clamped to the number of pixels. Duplicate draws are
    /// rejected by coordinate value and redrawn.
    pub fn sample<R: Rng + ?Sized>(grid: &PixelGrid, count: usize, rng: &mut R) -> Self {
        let (height, width) = grid.dimensions();
        let target = count.min(grid.pixel_count());

        let mut visited = CoordinateSet::new(height, width);
        let mut seeds = Vec::with_capacity(target);

        while seeds.len() < target {
            let row = rng.random_range(0..height);
            let col = rng.random_range(0..width);
            if !visited.insert(row, col) {
                continue;
            }
            if let Some(color) = grid.pixel(row, col) {
                seeds.push(Seed { row, col, color });
            }
        }

        Self { seeds }
    }

    /// Build a seed set from explicit seeds, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if two seeds share a position
    pub fn from_seeds(seeds: Vec<Seed>) -> Result<Self> {
        let mut positions = HashSet::with_capacity(seeds.len());
        if let Some(duplicate) = seeds
            .iter()
            .find(|seed| !positions.insert((seed.row, seed.col)))
        {
            return Err(invalid_argument(
                "seeds",
                &format!("({}, {})", duplicate.row, duplicate.col),
                &"seed positions must be distinct",
            ));
        }
        Ok(Self { seeds })
    }

    /// Number of seeds
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Check whether no seeds were drawn
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Seeds in sampling order
    pub fn iter(&self) -> impl Iterator<Item = &Seed> {
        self.seeds.iter()
    }

    /// Seed closest to `(row, col)`
    ///
    /// Ties go to the seed drawn first.
    pub fn nearest(&self, row: usize, col: usize) -> Option<&Seed> {
        let mut best: Option<(&Seed, usize)> = None;
        for seed in &self.seeds {
            let distance = seed.distance_squared(row, col);
            // Positions are distinct, so no later seed can tie a seed on the pixel itself
            if distance == 0 {
                return Some(seed);
            }
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((seed, distance));
            }
        }
        best.map(|(seed, _)| seed)
    }
}

/// Quantize `grid` into Voronoi cells around `seed_count` random seeds
///
/// A count above the number of pixels is clamped, in which case every pixel
/// is its own seed and the output equals the input. A count of zero also
/// returns the input unchanged.
///
/// # Errors
///
/// Returns `InvalidArgument` if `seed_count` is negative
pub fn mosaic<R: Rng + ?Sized>(
    grid: &PixelGrid,
    seed_count: i64,
    rng: &mut R,
) -> Result<PixelGrid> {
    let count = usize::try_from(seed_count).map_err(|_negative| {
        invalid_argument("seed_count", &seed_count, &"number of seeds must not be negative")
    })?;

    // No seeds, or one seed on every pixel, both leave the image as it was
    if count == 0 || count >= grid.pixel_count() {
        return Ok(grid.clone());
    }

    let seeds = SeedSet::sample(grid, count, rng);

    Ok(tessellate(grid, &seeds))
}

/// Paint every pixel of `grid` with the color of its nearest seed
pub fn tessellate(grid: &PixelGrid, seeds: &SeedSet) -> PixelGrid {
    let (height, width) = grid.dimensions();
    PixelGrid::from_fn(height, width, |row, col| {
        seeds
            .nearest(row, col)
            .map(|seed| seed.color)
            .or_else(|| grid.pixel(row, col))
            .unwrap_or_default()
    })
}
