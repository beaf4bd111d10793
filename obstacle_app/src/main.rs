//! Obstacle demo application
//!
//! Builds a small room through the remote-style interface: a floor slab and
//! a crate are created point by point, grouped into a collision list, made
//! the planner's obstacle set, and the crate is then moved in place.

use obstacle_engine::foundation::logging;
use obstacle_engine::prelude::*;
use std::sync::Arc;

/// Corner offsets of an axis-aligned box, indexed by bit pattern (x, y, z)
const BOX_CORNERS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Two outward-facing triangles per box face
const BOX_TRIANGLES: [[i64; 3]; 12] = [
    [0, 2, 1], [1, 2, 3], // -z
    [4, 5, 6], [5, 7, 6], // +z
    [0, 1, 4], [1, 5, 4], // -y
    [2, 6, 3], [3, 6, 7], // +y
    [0, 4, 2], [2, 4, 6], // -x
    [1, 3, 5], [3, 7, 5], // +x
];

fn build_box(servant: &ObstacleServant, name: &str, half_extents: [f64; 3]) -> Result<(), String> {
    if servant.create_polyhedron(name) != 0 {
        return Err(format!("could not create polyhedron {}", name));
    }

    for corner in &BOX_CORNERS {
        let rank = servant.add_point(
            name,
            corner[0] * half_extents[0],
            corner[1] * half_extents[1],
            corner[2] * half_extents[2],
        );
        if rank < 0 {
            return Err(format!("could not add a vertex to {}", name));
        }
    }

    for [a, b, c] in BOX_TRIANGLES {
        if servant.add_triangle(name, a, b, c) < 0 {
            return Err(format!("could not add a triangle to {}", name));
        }
    }

    Ok(())
}

fn log_obstacles(service: &ObstacleService) {
    for obstacle in service.obstacles() {
        match obstacle.as_body().and_then(|body| body.world_space()) {
            Some(world) => match world.aabb {
                Some(aabb) => log::info!(
                    "  {} centered at {:?}, extents {:?}",
                    obstacle.name(),
                    aabb.center().coords.as_slice(),
                    aabb.extents().as_slice()
                ),
                None => log::info!("  {} has no vertices", obstacle.name()),
            },
            None => log::info!("  {} (not a polyhedron)", obstacle.name()),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::default();
    config.validate()?;
    if std::env::var_os("RUST_LOG").is_some() {
        logging::init();
    } else {
        logging::init_with_level(&config.log_level);
    }

    log::info!("Creating obstacle demo...");
    let service = Arc::new(ObstacleService::new(&config));
    let servant = ObstacleServant::new(Arc::clone(&service));

    build_box(&servant, "floor", [5.0, 5.0, 0.05])?;
    build_box(&servant, "crate", [0.5, 0.5, 0.5])?;

    if servant.create_collision_list("room") != 0
        || servant.add_poly_to_coll_list("room", "floor") != 0
        || servant.set_obstacles("room") != 0
    {
        return Err("could not activate the room collision list".into());
    }

    if servant.add_obstacle_config("crate", &Configuration::translation(1.0, 0.0, 0.55)) != 0 {
        return Err("could not place the crate".into());
    }
    log::info!("Obstacles after setup:");
    log_obstacles(&service);

    let quarter_turn = Configuration {
        rot: [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        trs: [-2.0, 1.5, 0.55],
    };
    if !quarter_turn.to_transform("move_obstacle_config")?.is_rigid() {
        log::warn!("crate placement is not a rigid motion");
    }
    if servant.move_obstacle_config("crate", &quarter_turn) != 0 {
        return Err("could not move the crate".into());
    }
    log::info!("Obstacles after moving the crate:");
    log_obstacles(&service);

    // Moving something that was never installed is reported, not fatal
    build_box(&servant, "shelf", [0.2, 1.0, 1.0])?;
    if servant.move_obstacle_config("shelf", &quarter_turn) != 0 {
        log::warn!("shelf is registered but not installed, nothing moved");
    }

    log::info!(
        "Registered polyhedra: {:?}, collision lists: {:?}",
        service.body_names(),
        service.list_names()
    );
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        log::error!("Demo failed: {}", error);
        std::process::exit(1);
    }
}
