//! Planar clipping demo
//!
//! Loads a clipping configuration and an actor description, sweeps a
//! horizontal cutting plane up the actor and logs which collision shapes stay
//! active at each height.
//!
//! ```text
//! clip_demo [clipping.toml] [actor.ron]
//! ```

use std::path::PathBuf;

use planar_clip::config::ConfigError;
use planar_clip::foundation::logging;
use planar_clip::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene: {0}")]
    Scene(#[from] SceneError),
}

fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
}

fn log_collision(actor: &Actor) {
    for (body_index, states) in actor.collision_snapshot().iter().enumerate() {
        let summary: Vec<&str> = states
            .iter()
            .map(|state| if state.is_empty() { "off" } else { "on" })
            .collect();
        log::info!("  body {}: [{}]", body_index, summary.join(", "));
    }
}

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map_or_else(|| asset_path("clipping.toml"), PathBuf::from);
    let actor_path = args.next().map_or_else(|| asset_path("mannequin.ron"), PathBuf::from);

    let config = ClippingConfig::load(&config_path)?;
    logging::init_with_level(&config.log_level);
    log::info!("Loaded clipping config from {}", config_path.display());

    let mut actor = ActorDescription::load_actor(&actor_path, config.clone())?;
    log::info!(
        "Actor '{}': {} meshes, {} collision shapes",
        actor.name,
        actor.meshes.len(),
        actor.skeletal.as_ref().map_or(0, SkeletalBody::shape_count)
    );

    for height in [0.0_f32, 0.5, 1.2, 1.6, 2.0] {
        let cutter = Actor::new("cutter", config.clone())
            .with_transform(Transform::from_position(Vec3::new(0.0, height, 0.0)));

        if let Some(update) = actor.activate_clipping_from_actor(Some(&cutter)) {
            log::info!(
                "Plane at y = {:.2}: {} shapes on, {} off, {} material slots updated",
                height,
                update.collision.enabled,
                update.collision.disabled,
                update.materials_updated
            );
            log::debug!("Uniform block: {} bytes", actor.clipping().uniform().as_bytes().len());
            log_collision(&actor);
        }
    }

    let update = actor.deactivate_clipping();
    log::info!(
        "Clipping off: {} shapes on, {} off",
        update.collision.enabled,
        update.collision.disabled
    );

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("clip_demo: {}", err);
        std::process::exit(1);
    }
}
