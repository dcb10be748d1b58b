//! Browser smoke tests; run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use network_backdrop::field::{Field, NODE_COUNT};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn field_populates_with_browser_entropy() {
    let mut rng = rand::thread_rng();
    let mut field = Field::new();
    field.reinitialize(800.0, 600.0, &mut rng);
    assert_eq!(field.particles().len(), NODE_COUNT);
    for p in field.particles() {
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
    }
}

#[wasm_bindgen_test]
fn field_advances_without_losing_particles() {
    let mut rng = rand::thread_rng();
    let mut field = Field::new();
    field.reinitialize(320.0, 240.0, &mut rng);
    for _ in 0..10 {
        field.advance(320.0, 240.0);
    }
    assert_eq!(field.particles().len(), NODE_COUNT);
}
