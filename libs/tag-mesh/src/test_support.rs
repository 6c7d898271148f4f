//! Shared assertions for geometry tests.

use crate::mesh::Mesh;
use config::constants::VERTEX_WELD_EPSILON;
use std::collections::HashMap;

type Key = (i64, i64, i64);

fn weld_key(mesh: &Mesh, index: u32) -> Key {
    let p = mesh.vertex(index) / VERTEX_WELD_EPSILON;
    (p.x.round() as i64, p.y.round() as i64, p.z.round() as i64)
}

/// True when, after welding coincident positions, every directed edge is
/// matched by exactly one opposite edge: a closed, consistently wound
/// surface.
pub fn is_closed(mesh: &Mesh) -> bool {
    let mut directed: HashMap<(Key, Key), usize> = HashMap::new();
    for tri in mesh.triangles() {
        let keys = tri.map(|i| weld_key(mesh, i));
        for e in 0..3 {
            let edge = (keys[e], keys[(e + 1) % 3]);
            if edge.0 == edge.1 {
                return false;
            }
            *directed.entry(edge).or_default() += 1;
        }
    }

    directed
        .iter()
        .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
}

/// Signed volume via the divergence theorem; positive for outward winding.
pub fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.triangles()
        .iter()
        .map(|tri| {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            a.dot(b.cross(c)) / 6.0
        })
        .sum()
}
