pub mod sine;
pub mod terrain;

pub use sine::{Remapped, SineNoise};
pub use terrain::TerrainGenerator;
