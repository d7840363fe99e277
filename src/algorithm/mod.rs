/// Floyd-Steinberg error diffusion
pub mod dither;
/// Random-seed Voronoi mosaic
pub mod mosaic;
/// Transform descriptions and dispatch
pub mod operation;

pub use dither::dither;
pub use mosaic::{Seed, SeedSet, mosaic};
pub use operation::Operation;
