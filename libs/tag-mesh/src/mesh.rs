//! # Mesh
//!
//! Indexed triangle storage shared by every tag shape. Positions and
//! texture coordinates are kept in parallel arrays so each vertex owns
//! exactly one UV; vertices on a UV seam are duplicated by the builder.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{DVec2, DVec3};

/// Indexed triangle mesh in millimetres.
///
/// Triangles wind counter-clockwise when seen from outside the solid.
/// Geometry stays in f64 until it is flattened for upload or export.
///
/// # Example
///
/// ```rust
/// use tag_mesh::Mesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO, DVec2::ZERO);
/// let b = mesh.add_vertex(DVec3::X, DVec2::X);
/// let c = mesh.add_vertex(DVec3::Y, DVec2::Y);
/// mesh.add_triangle(a, b, c);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    positions: Vec<DVec3>,
    uvs: Vec<DVec2>,
    triangles: Vec<[u32; 3]>,
    /// Filled by [`Mesh::compute_normals`] once the mesh is final
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for a known vertex and triangle budget.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Appends a vertex and returns its index. Invalidates normals.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        self.normals = None;
        index
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.positions
    }

    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Texture coordinates, for remapping after construction.
    #[inline]
    pub fn uvs_mut(&mut self) -> &mut [DVec2] {
        &mut self.uvs
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Position of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Area-weighted vertex normals. Seam vertices are separate entries,
    /// so a cap and a wall never share a normal.
    pub fn compute_normals(&mut self) {
        let mut sums = vec![DVec3::ZERO; self.positions.len()];
        for &tri in &self.triangles {
            let weighted = self.facet_cross(tri);
            for i in tri {
                sums[i as usize] += weighted;
            }
        }
        self.normals = Some(sums.into_iter().map(DVec3::normalize_or_zero).collect());
    }

    /// Axis-aligned `(min, max)` corners; both zero for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((&first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)))
    }

    /// Shifts every vertex so the bounding box is centered on the origin.
    pub fn center(&mut self) {
        let (min, max) = self.bounding_box();
        let shift = (min + max) * 0.5;
        for p in &mut self.positions {
            *p -= shift;
        }
    }

    /// Index of the first triangle that cannot be exported: an index out
    /// of range, a repeated corner, or an area under
    /// [`DEGENERATE_AREA_EPSILON`].
    pub fn first_invalid_triangle(&self) -> Option<usize> {
        let count = self.positions.len();
        self.triangles.iter().position(|&[a, b, c]| {
            let in_range = [a, b, c].iter().all(|&i| (i as usize) < count);
            !in_range
                || a == b
                || b == c
                || a == c
                || self.facet_cross([a, b, c]).length() * 0.5 < DEGENERATE_AREA_EPSILON
        })
    }

    /// True when every triangle passes [`Mesh::first_invalid_triangle`].
    pub fn validate(&self) -> bool {
        self.first_invalid_triangle().is_none()
    }

    /// Positions as interleaved `x, y, z` floats.
    pub fn flat_positions(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Normals as interleaved `x, y, z` floats, if computed.
    pub fn flat_normals(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten3)
    }

    /// Texture coordinates as interleaved `u, v` floats.
    pub fn flat_uvs(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.concat()
    }

    fn facet_cross(&self, [a, b, c]: [u32; 3]) -> DVec3 {
        let origin = self.positions[a as usize];
        (self.positions[b as usize] - origin).cross(self.positions[c as usize] - origin)
    }
}

fn flatten3(points: &[DVec3]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}
