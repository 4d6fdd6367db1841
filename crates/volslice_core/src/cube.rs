//! Unit cube edge table
//!
//! The volume occupies the cube `[-1, 1]^3` in model space. Corners use
//! binary indexing: bit 0 = x, bit 1 = y, bit 2 = z, a set bit meaning +1.
//!
//! Every edge joins two corners that differ in exactly one bit and runs
//! from the corner with the bit clear to the corner with the bit set, so
//! each edge points along +X, +Y or +Z.

use volslice_math::Vec3;

/// Half the side length of the volume cube
pub const HALF_EXTENT: f32 = 1.0;

/// Number of cube edges
pub const EDGE_COUNT: usize = 12;

/// The 8 corners of the cube, indexed by their sign bits
pub const CUBE_CORNERS: [Vec3; 8] = compute_corners();

/// Corner index pairs for each edge, grouped by axis
pub const CUBE_EDGE_INDICES: [[usize; 2]; EDGE_COUNT] = compute_edge_indices();

/// The 12 edges of the cube in model space
pub const CUBE_EDGES: [CubeEdge; EDGE_COUNT] = compute_edges();

/// Triangle indices for the 6 faces (two triangles each), counter-clockwise
/// when seen from outside the cube
pub const CUBE_FACE_INDICES: [u16; 36] = [
    0, 2, 1, 1, 2, 3, // -Z
    4, 5, 6, 5, 7, 6, // +Z
    0, 4, 2, 2, 4, 6, // -X
    1, 3, 5, 3, 7, 5, // +X
    0, 1, 4, 1, 5, 4, // -Y
    2, 6, 3, 3, 6, 7, // +Y
];

/// One edge of the cube, as two endpoints in model space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeEdge {
    pub start: Vec3,
    pub end: Vec3,
}

impl CubeEdge {
    /// Create an edge between two points
    #[inline]
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Edge length
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Edge endpoints as a line list (2 positions per edge), for wireframe draws
pub fn edge_line_list() -> [Vec3; EDGE_COUNT * 2] {
    let mut lines = [Vec3::ZERO; EDGE_COUNT * 2];
    for (i, edge) in CUBE_EDGES.iter().enumerate() {
        lines[i * 2] = edge.start;
        lines[i * 2 + 1] = edge.end;
    }
    lines
}

/// Place each corner at `±HALF_EXTENT` per axis from its index bits
const fn compute_corners() -> [Vec3; 8] {
    const LOW: f32 = -HALF_EXTENT;
    let mut corners = [Vec3::ZERO; 8];
    let mut i = 0;

    while i < 8 {
        let x = if i & 1 != 0 { HALF_EXTENT } else { LOW };
        let y = if i & 2 != 0 { HALF_EXTENT } else { LOW };
        let z = if i & 4 != 0 { HALF_EXTENT } else { LOW };
        corners[i] = Vec3::new(x, y, z);
        i += 1;
    }

    corners
}

/// Compute the edge index table at compile time
const fn compute_edge_indices() -> [[usize; 2]; EDGE_COUNT] {
    let mut table = [[0usize; 2]; EDGE_COUNT];
    let mut edge_idx = 0;
    let mut axis = 0;

    while axis < 3 {
        let bit = 1 << axis;
        let mut corner = 0;

        while corner < 8 {
            if corner & bit == 0 {
                table[edge_idx] = [corner, corner | bit];
                edge_idx += 1;
            }
            corner += 1;
        }

        axis += 1;
    }

    table
}

/// Resolve the edge index table into endpoint positions at compile time
const fn compute_edges() -> [CubeEdge; EDGE_COUNT] {
    let mut edges = [CubeEdge::new(Vec3::ZERO, Vec3::ZERO); EDGE_COUNT];
    let mut i = 0;

    while i < EDGE_COUNT {
        let [a, b] = CUBE_EDGE_INDICES[i];
        edges[i] = CubeEdge::new(CUBE_CORNERS[a], CUBE_CORNERS[b]);
        i += 1;
    }

    edges
}
