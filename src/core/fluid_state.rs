use std::time::Instant;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    CAPSULE_COLOR, SCALED_WORLD_MAX, SCALED_WORLD_MIN, SUPPORT_RADIUS, SolverParams,
};
use crate::math::{Real, Vector};
use crate::scene;
use crate::solver::{
    advance_positions, apply_viscosity_impulses, compute_densities, double_density_relaxation,
    emit_particles, predict_velocities, remove_out_of_bounds, resolve_capsule_collisions,
};

use super::capsule::Capsule;
use super::emitter::Emitter;
use super::particle::Particle;
use super::spatial_hash::SpatialHashGrid;

/// Outcome of [`FluidState::add_or_commit_capsule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapsuleEdit {
    /// A pending capsule was started; its far end follows the pointer
    Started,
    /// The pending capsule joined the obstacle set
    Committed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub emitted: usize,
    pub culled: usize,
    pub particle_count: usize,
    pub step_ms: f32,
}

/// Input written by the editing side before each fixed step.
#[derive(Resource, Clone, Debug, Default)]
pub struct FluidInput {
    pub viewport_size: Vec2,
    /// Pointer in simulation space, `None` when it is off the viewport
    pub pointer: Option<Vector>,
}

/// The fluid engine: owns every particle, obstacle and emitter plus the grid.
///
/// All mutation goes through `&mut self`, so nothing can read the collections
/// while `update` is running.
#[derive(Resource)]
pub struct FluidState {
    particles: Vec<Particle>,
    capsules: Vec<Capsule>,
    pending_capsule: Option<Capsule>,
    emitters: Vec<Emitter>,
    grid: SpatialHashGrid,
    solver_params: SolverParams,
    world_min: Vector,
    world_max: Vector,
    viewport_size: Vec2,
    rng: StdRng,
    last_stats: FrameStats,
}

impl FluidState {
    /// Empty world (no obstacles, no emitters) over the scaled world rectangle.
    pub fn new(solver_params: SolverParams) -> Self {
        Self {
            particles: Vec::new(),
            capsules: Vec::new(),
            pending_capsule: None,
            emitters: Vec::new(),
            grid: SpatialHashGrid::new(SUPPORT_RADIUS, SCALED_WORLD_MIN, SCALED_WORLD_MAX),
            solver_params,
            world_min: SCALED_WORLD_MIN,
            world_max: SCALED_WORLD_MAX,
            viewport_size: Vec2::ZERO,
            rng: StdRng::from_os_rng(),
            last_stats: FrameStats::default(),
        }
    }

    /// Frame, interior obstacles and a single emitter.
    pub fn with_default_scene(mut self) -> Self {
        self.capsules.extend(scene::default_capsules());
        self.emitters.extend(scene::default_emitters());
        self
    }

    /// Seeds the emission jitter so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn capsules(&self) -> &[Capsule] {
        &self.capsules
    }

    pub fn pending_capsule(&self) -> Option<&Capsule> {
        self.pending_capsule.as_ref()
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub fn emitter_mut(&mut self, index: usize) -> Option<&mut Emitter> {
        self.emitters.get_mut(index)
    }

    pub fn grid(&self) -> &SpatialHashGrid {
        &self.grid
    }

    pub fn solver_params(&self) -> &SolverParams {
        &self.solver_params
    }

    pub fn solver_params_mut(&mut self) -> &mut SolverParams {
        &mut self.solver_params
    }

    /// Scaled world rectangle `(min, max)`; particles outside it are culled.
    pub fn world_bounds(&self) -> (Vector, Vector) {
        (self.world_min, self.world_max)
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn add_particle(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }

    pub fn add_capsule(&mut self, capsule: Capsule) -> usize {
        self.capsules.push(capsule);
        self.capsules.len() - 1
    }

    /// Runs one frame: emit, cull, predict, viscosity, advance, density,
    /// capsule collision and double density relaxation, in that order.
    pub fn update(&mut self, viewport_size: Vec2, pointer: Option<Vector>, dt: Real) -> FrameStats {
        let start = Instant::now();
        self.viewport_size = viewport_size;

        if let (Some(capsule), Some(pointer)) = (self.pending_capsule.as_mut(), pointer) {
            capsule.p1 = pointer;
        }

        let emitted = emit_particles(
            &mut self.emitters,
            &mut self.particles,
            &self.solver_params,
            &mut self.rng,
            dt,
        );
        let culled = remove_out_of_bounds(&mut self.particles, self.world_min, self.world_max);

        predict_velocities(&mut self.particles, &self.solver_params);
        self.grid.rebuild(&self.particles);
        apply_viscosity_impulses(&mut self.particles, &self.grid, &self.solver_params);

        advance_positions(&mut self.particles, &self.solver_params);
        // Density, collision and relaxation all query the advanced positions
        self.grid.rebuild(&self.particles);
        compute_densities(&mut self.particles, &self.grid);
        resolve_capsule_collisions(
            &mut self.particles,
            &self.capsules,
            self.solver_params.collision_damping,
        );
        double_density_relaxation(&mut self.particles, &self.grid, &self.solver_params);

        self.last_stats = FrameStats {
            emitted,
            culled,
            particle_count: self.particles.len(),
            step_ms: start.elapsed().as_secs_f32() * 1000.0,
        };
        debug!(
            "fluid_step: {:.3}ms particles={} emitted={} culled={}",
            self.last_stats.step_ms, self.last_stats.particle_count, emitted, culled
        );
        self.last_stats
    }

    /// First call starts a pending capsule at `world_pos`; the second commits it.
    pub fn add_or_commit_capsule(&mut self, world_pos: Vector, radius: Real) -> CapsuleEdit {
        match self.pending_capsule.take() {
            Some(capsule) => {
                info!(
                    "capsule committed: ({:.1}, {:.1}) -> ({:.1}, {:.1}) r={:.1}",
                    capsule.p0.x, capsule.p0.y, capsule.p1.x, capsule.p1.y, capsule.radius
                );
                self.capsules.push(capsule);
                CapsuleEdit::Committed
            }
            None => {
                self.pending_capsule =
                    Some(Capsule::new(world_pos, world_pos, radius, CAPSULE_COLOR));
                CapsuleEdit::Started
            }
        }
    }

    pub fn cancel_pending_capsule(&mut self) -> Option<Capsule> {
        self.pending_capsule.take()
    }

    /// Removes every capsule containing `world_pos`; returns how many went.
    pub fn remove_capsule_at(&mut self, world_pos: Vector) -> usize {
        let before = self.capsules.len();
        self.capsules.retain(|capsule| !capsule.contains(world_pos));
        let removed = before - self.capsules.len();
        if removed > 0 {
            info!("removed {} capsule(s) at ({:.1}, {:.1})", removed, world_pos.x, world_pos.y);
        }
        removed
    }

    pub fn add_emitter(&mut self, world_pos: Vector) -> usize {
        self.emitters.push(Emitter::new(world_pos));
        info!("emitter added at ({:.1}, {:.1})", world_pos.x, world_pos.y);
        self.emitters.len() - 1
    }

    /// Index of the first emitter whose hit disc contains `world_pos`.
    pub fn find_emitter_at(&self, world_pos: Vector) -> Option<usize> {
        self.emitters.iter().position(|emitter| emitter.contains(world_pos))
    }

    pub fn remove_emitter_at(&mut self, world_pos: Vector) -> Option<Emitter> {
        let index = self.find_emitter_at(world_pos)?;
        info!("emitter {} removed", index);
        Some(self.emitters.remove(index))
    }

    pub fn select_emitter_at(&mut self, world_pos: Vector) -> Option<&mut Emitter> {
        let index = self.find_emitter_at(world_pos)?;
        self.emitters.get_mut(index)
    }

    /// Drops every particle. Obstacles and emitters stay.
    pub fn reset(&mut self) {
        info!("fluid reset, {} particles dropped", self.particles.len());
        self.particles.clear();
        self.grid.clear();
    }
}

impl Default for FluidState {
    fn default() -> Self {
        Self::new(SolverParams::default()).with_default_scene()
    }
}

pub fn step_fluid(time: Res<Time>, input: Res<FluidInput>, mut state: ResMut<FluidState>) {
    state.update(input.viewport_size, input.pointer, time.delta_secs());
}
