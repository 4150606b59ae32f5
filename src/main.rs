// Interactive editor for the fluid scene.
//
// Left click starts a capsule and commits it on the second click, right click
// removes capsules under the cursor, Escape cancels the pending one. E adds an
// emitter, Delete removes the emitter under the cursor and middle click
// selects one for live tuning.
//
// Tuning keys for the selected emitter: Q/W base angle, A/S angular velocity,
// Z/X strength, C/V jitter, [/] period. R drops every particle, L toggles the
// particle cap and -/= moves it.
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use pvfs2d::{
    CAPSULE_RADIUS, CapsuleEdit, FluidInput, FluidPlugin, FluidState, PARTICLE_RADIUS, WORLD_SCALE,
};

/// World units per simulation unit
const DISPLAY_SCALE: f32 = 0.45;
/// Simulation point drawn at the window center
const VIEW_CENTER: Vec2 = Vec2::new(0.0, 150.0);

const ANGLE_STEP: f32 = 5.0;
const ANGULAR_VELOCITY_STEP: f32 = 1.0;
const STRENGTH_STEP: f32 = 0.0005;
const JITTER_STEP: f32 = 0.5;
const PERIOD_STEP: f32 = 0.01;
const PARTICLE_CAP_STEP: usize = 250;

#[derive(Resource, Default)]
struct EditorState {
    selected_emitter: Option<usize>,
}

// Simulation space is +Y down, Bevy world space is +Y up.
fn sim_to_world(position: Vec2) -> Vec2 {
    Vec2::new(position.x - VIEW_CENTER.x, VIEW_CENTER.y - position.y) * DISPLAY_SCALE
}

fn world_to_sim(position: Vec2) -> Vec2 {
    let scaled = position / DISPLAY_SCALE;
    Vec2::new(scaled.x + VIEW_CENTER.x, VIEW_CENTER.y - scaled.y)
}

fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut input: ResMut<FluidInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    input.viewport_size = window.size();
    input.pointer = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok())
        .map(world_to_sim);
}

fn edit_scene(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    input: Res<FluidInput>,
    mut editor: ResMut<EditorState>,
    mut state: ResMut<FluidState>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        state.cancel_pending_capsule();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        state.reset();
    }
    if keys.just_pressed(KeyCode::KeyL) {
        let params = state.solver_params_mut();
        params.limit_particles = !params.limit_particles;
        info!("particle limit: {:?}", params.particle_limit());
    }
    if keys.just_pressed(KeyCode::Equal) {
        state.solver_params_mut().max_particles += PARTICLE_CAP_STEP;
    }
    if keys.just_pressed(KeyCode::Minus) {
        let params = state.solver_params_mut();
        params.max_particles = params.max_particles.saturating_sub(PARTICLE_CAP_STEP);
    }

    let Some(pointer) = input.pointer else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        let edit = state.add_or_commit_capsule(pointer, CAPSULE_RADIUS * WORLD_SCALE);
        if edit == CapsuleEdit::Started {
            debug!("capsule started at ({:.1}, {:.1})", pointer.x, pointer.y);
        }
    }
    if mouse.just_pressed(MouseButton::Right) {
        state.remove_capsule_at(pointer);
    }
    if mouse.just_pressed(MouseButton::Middle) {
        editor.selected_emitter = state.find_emitter_at(pointer);
    }
    if keys.just_pressed(KeyCode::KeyE) {
        editor.selected_emitter = Some(state.add_emitter(pointer));
    }
    if keys.just_pressed(KeyCode::Delete) && state.remove_emitter_at(pointer).is_some() {
        editor.selected_emitter = None;
    }
}

fn tune_selected_emitter(
    keys: Res<ButtonInput<KeyCode>>,
    editor: Res<EditorState>,
    mut state: ResMut<FluidState>,
) {
    let Some(index) = editor.selected_emitter else {
        return;
    };
    let Some(emitter) = state.emitter_mut(index) else {
        return;
    };

    let step = |decrease: KeyCode, increase: KeyCode| -> f32 {
        keys.just_pressed(increase) as i32 as f32 - keys.just_pressed(decrease) as i32 as f32
    };

    emitter.base_angle += step(KeyCode::KeyQ, KeyCode::KeyW) * ANGLE_STEP;
    emitter.angular_velocity += step(KeyCode::KeyA, KeyCode::KeyS) * ANGULAR_VELOCITY_STEP;
    emitter.strength += step(KeyCode::KeyZ, KeyCode::KeyX) * STRENGTH_STEP;
    emitter.strength = emitter.strength.max(0.0);
    emitter.jitter = (emitter.jitter + step(KeyCode::KeyC, KeyCode::KeyV) * JITTER_STEP).max(0.0);
    emitter.period += step(KeyCode::BracketLeft, KeyCode::BracketRight) * PERIOD_STEP;
    emitter.period = emitter.period.max(0.0);
}

#[derive(Component)]
struct ParticleVisual {
    index: usize,
}

#[derive(Resource)]
struct ParticleMesh(Handle<Mesh>);

fn setup_particle_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let mesh = meshes.add(Circle::new(PARTICLE_RADIUS * 0.5 * DISPLAY_SCALE));
    commands.insert_resource(ParticleMesh(mesh));
}

// Visuals form a pool indexed like the particle list: entities past the end
// are despawned and missing ones spawned.
fn sync_particle_visuals(
    mut commands: Commands,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mesh: Res<ParticleMesh>,
    state: Res<FluidState>,
    mut visuals: Query<(Entity, &ParticleVisual, &mut Transform)>,
) {
    let particles = state.particles();
    let mut pooled = 0;

    for (entity, visual, mut transform) in visuals.iter_mut() {
        match particles.get(visual.index) {
            Some(particle) => {
                transform.translation = sim_to_world(particle.position).extend(0.0);
                pooled = pooled.max(visual.index + 1);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for (index, particle) in particles.iter().enumerate().skip(pooled) {
        commands.spawn((
            ParticleVisual { index },
            Mesh2d(mesh.0.clone()),
            MeshMaterial2d(materials.add(particle.color)),
            Transform::from_translation(sim_to_world(particle.position).extend(0.0)),
        ));
    }
}

fn draw_scene(mut gizmos: Gizmos, state: Res<FluidState>, editor: Res<EditorState>) {
    for capsule in state.capsules().iter().chain(state.pending_capsule()) {
        let a = sim_to_world(capsule.p0);
        let b = sim_to_world(capsule.p1);
        let radius = capsule.radius * DISPLAY_SCALE;
        let side = (b - a).try_normalize().map_or(Vec2::X, |axis| axis.perp()) * radius;

        gizmos.circle_2d(a, radius, capsule.color);
        gizmos.circle_2d(b, radius, capsule.color);
        gizmos.line_2d(a + side, b + side, capsule.color);
        gizmos.line_2d(a - side, b - side, capsule.color);
    }

    for (index, emitter) in state.emitters().iter().enumerate() {
        let center = sim_to_world(emitter.position);
        let radius = emitter.radius * DISPLAY_SCALE;
        let tip = sim_to_world(emitter.position + emitter.direction() * emitter.radius * 3.0);
        let color = if editor.selected_emitter == Some(index) {
            Color::WHITE
        } else {
            emitter.color
        };

        gizmos.circle_2d(center, radius, color);
        gizmos.line_2d(center, tip, color);
    }
}

fn init(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[derive(Component)]
struct DiagnosticsText;

fn setup_diagnostics(mut commands: Commands) {
    commands.spawn((
        Text::default(),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        DiagnosticsText,
    ));
}

fn update_diagnostics(
    diagnostics: Res<DiagnosticsStore>,
    state: Res<FluidState>,
    editor: Res<EditorState>,
    mut query: Query<&mut Text, With<DiagnosticsText>>,
) {
    let stats = state.last_stats();
    let selected = editor
        .selected_emitter
        .and_then(|index| state.emitters().get(index))
        .map(|emitter| {
            format!(
                "\nEmitter: angle {:.0} (+{:.0}/shot) strength {:.4} jitter {:.1} period {:.2}s",
                emitter.base_angle,
                emitter.angular_velocity,
                emitter.strength,
                emitter.jitter,
                emitter.period
            )
        })
        .unwrap_or_default();

    for mut text in &mut query {
        let fps = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
            .unwrap_or(0.0);

        text.0 = format!(
            "FPS: {:.1}\nParticles: {} (limit {:?})\nStep: {:.3} ms{}",
            fps,
            stats.particle_count,
            state.solver_params().particle_limit(),
            stats.step_ms,
            selected,
        );
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(FluidPlugin::default())
        .init_resource::<EditorState>()
        .add_systems(Startup, (init, setup_particle_mesh, setup_diagnostics))
        .add_systems(
            Update,
            (
                track_pointer,
                edit_scene,
                tune_selected_emitter,
                sync_particle_visuals,
                draw_scene,
                update_diagnostics,
            )
                .chain(),
        )
        .run();
}
