pub mod capsule;
pub mod emitter;
pub mod fluid_state;
pub mod kernel;
pub mod particle;
pub mod spatial_hash;

pub use capsule::Capsule;
pub use emitter::Emitter;
pub use fluid_state::{CapsuleEdit, FluidInput, FluidState, FrameStats, step_fluid};
pub use kernel::{NeighborPair, neighbor_pair};
pub use particle::Particle;
pub use spatial_hash::SpatialHashGrid;
