//! Cross-module behavior tests for the obstacle service

mod registry_properties;
mod concurrency;

use crate::core::config::ServiceConfig;
use crate::service::ObstacleService;

/// Service with one finalized-ready unit triangle named `name`
fn service_with_triangle(name: &str) -> ObstacleService {
    let service = ObstacleService::new(&ServiceConfig::default());
    add_triangle_mesh(&service, name);
    service
}

fn add_triangle_mesh(service: &ObstacleService, name: &str) {
    service.create_polyhedron(name).unwrap();
    service.add_point(name, 0.0, 0.0, 0.0).unwrap();
    service.add_point(name, 1.0, 0.0, 0.0).unwrap();
    service.add_point(name, 0.0, 1.0, 0.0).unwrap();
    service.add_triangle(name, [0, 1, 2]).unwrap();
}
