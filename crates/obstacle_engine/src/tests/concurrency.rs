//! Shared service under concurrent callers

use super::add_triangle_mesh;
use crate::geometry::Transform;
use crate::foundation::math::Vec3;
use crate::service::ObstacleService;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_appenders_get_unique_ranks() {
    let service = Arc::new(ObstacleService::default());
    service.create_polyhedron("P").unwrap();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                (0..250)
                    .map(|i| service.add_point("P", f64::from(worker), f64::from(i), 0.0).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ranks = HashSet::new();
    for worker in workers {
        for rank in worker.join().unwrap() {
            assert!(ranks.insert(rank), "rank {rank} handed out twice");
        }
    }

    assert_eq!(ranks.len(), 1000);
    assert_eq!(ranks.iter().max(), Some(&999));
    assert_eq!(service.body("P").unwrap().vertex_count(), 1000);
}

#[test]
fn test_concurrent_creates_single_winner() {
    let service = Arc::new(ObstacleService::default());

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.create_polyhedron("P").is_ok())
        })
        .collect();

    let winners = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .filter(|created| *created)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(service.body_names(), vec!["P"]);
}

#[test]
fn test_installs_and_moves_interleave() {
    let service = Arc::new(ObstacleService::default());
    add_triangle_mesh(&service, "P");
    service.place_and_install("P", Transform::identity()).unwrap();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for step in 0..50 {
                    let offset = Vec3::new(f64::from(worker), f64::from(step), 0.0);
                    let target = Transform::from_translation(offset).unwrap();
                    if step % 10 == 0 {
                        service.place_and_install("P", target).unwrap();
                    } else {
                        service.reposition("P", target).unwrap();
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    // 1 initial install plus 5 per worker
    assert_eq!(service.obstacles().len(), 21);
    assert!(service.body("P").unwrap().is_placed());
}
