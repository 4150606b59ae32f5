//! Per-frame fluid passes
//!
//! Each pass is a free function over the particle slice so the pipeline order
//! lives in one place (`FluidState::update`).

pub mod collision;
pub mod culling;
pub mod density;
pub mod emission;
pub mod integration;
pub mod relaxation;
pub mod viscosity;

pub use collision::*;
pub use culling::*;
pub use density::*;
pub use emission::*;
pub use integration::*;
pub use relaxation::*;
pub use viscosity::*;
