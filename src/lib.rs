use std::time::Duration;

use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod math;
pub mod scene;
pub mod solver;

pub use crate::config::*;
pub use crate::core::{
    Capsule, CapsuleEdit, Emitter, FluidInput, FluidState, FrameStats, Particle, SpatialHashGrid,
    step_fluid,
};
pub use crate::math::{Real, Vector};

/// Inserts the default scene and steps it once per fixed tick.
pub struct FluidPlugin {
    pub solver_params: SolverParams,
    pub tick_rate: f64,
}

impl Default for FluidPlugin {
    fn default() -> Self {
        Self {
            solver_params: SolverParams::default(),
            tick_rate: 60.0,
        }
    }
}

impl Plugin for FluidPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FluidState::new(self.solver_params.clone()).with_default_scene());
        app.init_resource::<FluidInput>();
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f64(
            1.0 / self.tick_rate,
        )));
        app.add_systems(FixedUpdate, step_fluid);
    }
}
