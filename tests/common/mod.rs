//! Shared helpers for catgraph integration tests

#![allow(dead_code)]

use catgraph::{Category, MorphismId, NamingStrategy, ObjectId};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness writer
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// The three-object example: A0, A1, A2 with f: A0→A0, g: A0→A1, h: A1→A2
pub struct Triangle {
    pub category: Category,
    pub objects: [ObjectId; 3],
    pub f: MorphismId,
    pub g: MorphismId,
    pub h: MorphismId,
}

pub fn triangle(naming: NamingStrategy) -> Triangle {
    init_tracing();
    let mut category = Category::new("A", naming);
    let objects = [
        category.create_object().unwrap(),
        category.create_object().unwrap(),
        category.create_object().unwrap(),
    ];
    let f = category.create_morphism(objects[0], objects[0]).unwrap();
    let g = category.create_morphism(objects[0], objects[1]).unwrap();
    let h = category.create_morphism(objects[1], objects[2]).unwrap();
    Triangle {
        category,
        objects,
        f,
        g,
        h,
    }
}
