//! Registry invariants: ranks, name uniqueness, no side effects on failure

use super::{add_triangle_mesh, service_with_triangle};
use crate::core::config::ServiceConfig;
use crate::error::{ObjectKind, RegistryError};
use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::Transform;
use crate::service::ObstacleService;
use approx::assert_relative_eq;

#[test]
fn test_point_rank_counts_prior_points() {
    let service = ObstacleService::default();
    service.create_polyhedron("P").unwrap();

    for expected in 0..100_usize {
        let rank = service.add_point("P", expected as f64, f64::NAN, f64::INFINITY).unwrap();
        assert_eq!(rank, expected);
    }
    assert_eq!(service.body("P").unwrap().vertex_count(), 100);
}

#[test]
fn test_ranks_are_per_mesh() {
    let service = ObstacleService::default();
    service.create_polyhedron("A").unwrap();
    service.create_polyhedron("B").unwrap();

    assert_eq!(service.add_point("A", 0.0, 0.0, 0.0), Ok(0));
    assert_eq!(service.add_point("A", 1.0, 0.0, 0.0), Ok(1));
    assert_eq!(service.add_point("B", 0.0, 0.0, 0.0), Ok(0));
    assert_eq!(service.add_point("A", 2.0, 0.0, 0.0), Ok(2));
}

#[test]
fn test_duplicate_polyhedron_rejected() {
    let service = ObstacleService::default();
    service.create_polyhedron("P").unwrap();
    service.add_point("P", 1.0, 2.0, 3.0).unwrap();

    let second = service.create_polyhedron("P");
    assert_eq!(
        second,
        Err(RegistryError::AlreadyExists {
            operation: "create_polyhedron",
            kind: ObjectKind::Polyhedron,
            name: "P".to_string(),
        })
    );

    // Repeating the failure changes nothing either
    assert!(service.create_polyhedron("P").is_err());
    assert_eq!(service.body_names(), vec!["P"]);
    assert_eq!(service.body("P").unwrap().vertex_count(), 1);
}

#[test]
fn test_add_point_to_missing_polyhedron() {
    let service = ObstacleService::default();

    let result = service.add_point("missing", 0.0, 0.0, 0.0);
    assert!(result.unwrap_err().is_not_found());
    assert!(!service.contains_body("missing"));
    assert!(service.body_names().is_empty());
}

#[test]
fn test_add_triangle_to_missing_polyhedron() {
    let service = ObstacleService::default();

    let result = service.add_triangle("missing", [0, 1, 2]);
    assert!(result.unwrap_err().is_not_found());
    assert!(!service.contains_body("missing"));
}

#[test]
fn test_eager_out_of_range() {
    let service = ObstacleService::default();
    service.create_polyhedron("P").unwrap();
    service.add_point("P", 0.0, 0.0, 0.0).unwrap();
    service.add_point("P", 1.0, 0.0, 0.0).unwrap();

    let result = service.add_triangle("P", [0, 1, 2]);
    assert!(matches!(
        result,
        Err(RegistryError::OutOfRange { index: 2, vertex_count: 2, .. })
    ));
    assert_eq!(service.body("P").unwrap().triangle_count(), 0);

    // Once the vertex exists the same triangle is accepted
    service.add_point("P", 0.0, 1.0, 0.0).unwrap();
    assert_eq!(service.add_triangle("P", [0, 1, 2]), Ok(0));
}

#[test]
fn test_deferred_out_of_range() {
    let config = ServiceConfig::new().with_eager_validation(false);
    let service = ObstacleService::new(&config);
    service.create_polyhedron("P").unwrap();
    service.add_point("P", 0.0, 0.0, 0.0).unwrap();

    assert_eq!(service.add_triangle("P", [0, 1, 2]), Ok(0));
    assert!(matches!(
        service.finalize("P"),
        Err(RegistryError::Geometry { .. })
    ));
    assert_eq!(service.is_finalized("P"), Ok(false));
}

#[test]
fn test_explicit_finalize_once() {
    let service = service_with_triangle("P");

    let entity = service.finalize("P").unwrap();
    assert_eq!(entity.triangles(), &[[0, 1, 2]]);

    assert!(matches!(
        service.finalize("P"),
        Err(RegistryError::AlreadyFinalized { .. })
    ));
    assert!(matches!(
        service.add_point("P", 0.0, 0.0, 1.0),
        Err(RegistryError::AlreadyFinalized { .. })
    ));

    // Implicit finalization tolerates an already finalized body
    assert!(service.install("P").is_ok());
}

#[test]
fn test_place_and_install_identity() {
    let service = service_with_triangle("P");

    service.place_and_install("P", Transform::identity()).unwrap();

    let obstacles = service.obstacles();
    assert_eq!(obstacles.len(), 1);
    assert_eq!(obstacles[0].name(), "P");
    let body = obstacles[0].as_body().unwrap();
    assert_eq!(*body.transform().matrix(), Mat4::identity());
    assert!(body.is_finalized());
}

#[test]
fn test_duplicate_installs_are_kept() {
    let service = service_with_triangle("P");
    let moved = Transform::from_translation(Vec3::new(0.0, 0.0, 1.0)).unwrap();

    service.place_and_install("P", Transform::identity()).unwrap();
    service.place_and_install("P", moved).unwrap();

    let obstacles = service.obstacles();
    assert_eq!(obstacles.len(), 2);
    // Both entries are the same body, so both see the latest placement
    for obstacle in &obstacles {
        assert_eq!(obstacle.as_body().unwrap().transform(), moved);
    }
}

#[test]
fn test_place_unknown_polyhedron() {
    let service = ObstacleService::default();

    let result = service.place_and_install("missing", Transform::identity());
    assert!(result.unwrap_err().is_not_found());
    assert!(service.obstacles().is_empty());
}

#[test]
fn test_duplicate_collision_list_rejected() {
    let service = ObstacleService::default();

    assert!(service.create_list("L").is_ok());
    let second = service.create_list("L");
    assert!(second.unwrap_err().is_already_exists());
    assert_eq!(service.list_names(), vec!["L"]);
}

#[test]
fn test_add_missing_body_to_list() {
    let service = ObstacleService::default();
    service.create_list("L").unwrap();

    let result = service.add_body_to_list("L", "P");
    assert!(matches!(
        result,
        Err(RegistryError::NotFound { kind: ObjectKind::Polyhedron, .. })
    ));
    assert!(service.list("L").unwrap().is_empty());
}

#[test]
fn test_add_body_to_missing_list() {
    let service = service_with_triangle("P");

    let result = service.add_body_to_list("L", "P");
    assert!(matches!(
        result,
        Err(RegistryError::NotFound { kind: ObjectKind::CollisionList, .. })
    ));
    // The body was not touched
    assert_eq!(service.is_finalized("P"), Ok(false));
}

#[test]
fn test_list_add_finalizes_without_installing() {
    let service = service_with_triangle("P");
    service.create_list("L").unwrap();

    service.add_body_to_list("L", "P").unwrap();

    assert_eq!(service.is_finalized("P"), Ok(true));
    assert_eq!(service.list("L").unwrap().names(), vec!["P"]);
    assert!(service.obstacles().is_empty());
}

#[test]
fn test_reposition_installed_obstacle() {
    let service = service_with_triangle("P");
    service.place_and_install("P", Transform::identity()).unwrap();

    let target = Transform::from_rotation_translation(
        &[0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        &[2.0, 0.0, 0.0],
    )
    .unwrap();
    service.reposition("P", target).unwrap();

    let obstacles = service.obstacles();
    assert_eq!(obstacles[0].as_body().unwrap().transform(), target);

    let world = service.body("P").unwrap().world_space().unwrap();
    let aabb = world.aabb.unwrap();
    assert_relative_eq!(aabb.min.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(aabb.max.x, 2.0, epsilon = 1e-12);
}

#[test]
fn test_reposition_searches_live_set_only() {
    let service = service_with_triangle("P");
    add_triangle_mesh(&service, "Q");
    service.place_and_install("P", Transform::identity()).unwrap();

    let target = Transform::from_translation(Vec3::new(5.0, 0.0, 0.0)).unwrap();
    let result = service.reposition("Q", target);

    assert!(matches!(
        result,
        Err(RegistryError::NotFound { kind: ObjectKind::Obstacle, .. })
    ));
    assert!(service.contains_body("Q"));
    assert!(!service.body("Q").unwrap().is_placed());
}

#[test]
fn test_reposition_after_list_activation() {
    let service = service_with_triangle("P");
    service.create_list("L").unwrap();
    service.add_body_to_list("L", "P").unwrap();

    let target = Transform::from_translation(Vec3::new(0.0, 3.0, 0.0)).unwrap();
    assert!(service.reposition("P", target).unwrap_err().is_not_found());

    service.activate_list("L").unwrap();
    service.reposition("P", target).unwrap();
    assert_eq!(service.body("P").unwrap().transform(), target);
}
