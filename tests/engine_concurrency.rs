//! Concurrent use of a shared CategoryEngine
//!
//! Mutations on one category are serialised by the engine; these tests
//! hammer a single category from several threads and check that the
//! serial counters and adjacency indices come out consistent.

mod common;

use catgraph::{CategoryEngine, MorphismId, NamingStrategy, ObjectId};
use common::init_tracing;
use std::collections::HashSet;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

#[test]
fn concurrent_object_creation_never_shares_a_serial_number() {
    init_tracing();
    let engine = CategoryEngine::new();
    let id = engine.create_category("C", NamingStrategy::Serial);

    let created: Vec<ObjectId> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| engine.create_object(&id).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let labels: HashSet<String> = engine
        .with_category(&id, |c| created.iter().map(|o| c.display_object(o)).collect())
        .unwrap();
    assert_eq!(labels.len(), THREADS * PER_THREAD);
    for n in 0..THREADS * PER_THREAD {
        assert!(labels.contains(&format!("C{n}")));
    }
}

#[test]
fn concurrent_morphisms_and_compositions_stay_consistent() {
    init_tracing();
    let engine = CategoryEngine::new();
    let id = engine.create_category("C", NamingStrategy::Serial);
    let x = engine.create_object(&id).unwrap();
    let y = engine.create_object(&id).unwrap();
    let g = engine.create_morphism(y, y).unwrap();

    let created: Vec<MorphismId> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    let mut ids = Vec::new();
                    for _ in 0..PER_THREAD {
                        let f = engine.create_morphism(x, y).unwrap();
                        ids.push(f);
                        ids.push(engine.compose(f, g).unwrap());
                    }
                    ids
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    engine
        .with_category(&id, |c| {
            // g plus everything the threads made
            let expected = 1 + THREADS * PER_THREAD * 2;
            let numbers: HashSet<String> = c
                .morphisms()
                .filter(|m| !m.is_identity())
                .filter_map(|m| m.label().map(str::to_owned))
                .collect();
            assert_eq!(numbers.len(), expected);

            let hom = c.hom(&x, &y);
            assert_eq!(hom.len(), created.len());
            let y_from_x = &c.object(&y).unwrap().morphisms_from()[&x];
            assert_eq!(&hom, y_from_x);
        })
        .unwrap();
}

#[test]
fn readers_run_alongside_other_categories_writers() {
    init_tracing();
    let engine = CategoryEngine::new();
    let busy = engine.create_category("Busy", NamingStrategy::Unlabeled);
    let quiet = engine.create_category("Quiet", NamingStrategy::Unlabeled);
    let q0 = engine.create_object(&quiet).unwrap();

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..PER_THREAD {
                engine.create_object(&busy).unwrap();
            }
        });
        scope.spawn(|| {
            for _ in 0..PER_THREAD {
                let count = engine.with_category(&quiet, |c| c.hom(&q0, &q0).len()).unwrap();
                assert_eq!(count, 1);
            }
        });
    });

    assert_eq!(
        engine.with_category(&busy, |c| c.object_count()).unwrap(),
        PER_THREAD
    );
}
