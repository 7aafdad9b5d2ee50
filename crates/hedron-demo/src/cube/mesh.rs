//! Cube geometry as constant tables.
//!
//! Six faces, each with its own four vertices so per-face flat colors need
//! no corner sharing. The whole cube is one indexed strip stream: four
//! indices per face, faces separated by the restart sentinel, giving a
//! single 29-entry draw instead of 36 triangle-list indices.
//!
//! Within a face the four corners are stored in strip (zigzag) order, so a
//! run `[a, b, c, d]` triangulates the face quad as `(a, b, c)` + `(b, d, c)`.

/// Primitive-restart sentinel: the maximum `u32` index value.
///
/// Strip pipelines with a `u32` index format treat the all-ones index as
/// "cut the strip here". Keeping it named makes the index table readable and
/// lets tests assert it can never collide with a real vertex index.
pub const RESTART_INDEX: u32 = u32::MAX;

/// Four corners per face, six faces.
pub const VERTEX_COUNT: usize = 24;

/// Six 4-index runs plus five separators.
pub const INDEX_COUNT: usize = 29;

/// Vertex positions, four per face in strip order.
#[rustfmt::skip]
pub const POSITIONS: [[f32; 3]; VERTEX_COUNT] = [
    // +y face
    [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
    // -y face
    [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5],
    // +z face (top)
    [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
    // -z face (bottom)
    [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5],
    // +x face
    [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5],
    // -x face
    [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5],
];

/// Per-vertex colors: one flat color per face.
#[rustfmt::skip]
pub const COLORS: [[f32; 3]; VERTEX_COUNT] = [
    // +y: green
    [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0],
    // -y: dark green
    [0.0, 0.5, 0.0], [0.0, 0.5, 0.0], [0.0, 0.5, 0.0], [0.0, 0.5, 0.0],
    // +z: blue
    [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0],
    // -z: dark blue
    [0.0, 0.0, 0.5], [0.0, 0.0, 0.5], [0.0, 0.0, 0.5], [0.0, 0.0, 0.5],
    // +x: red
    [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0],
    // -x: dark red
    [0.5, 0.0, 0.0], [0.5, 0.0, 0.0], [0.5, 0.0, 0.0], [0.5, 0.0, 0.0],
];

/// Index stream: six 4-index strip runs separated by [`RESTART_INDEX`].
///
/// No trailing sentinel; the final run ends with the stream itself.
#[rustfmt::skip]
pub const INDICES: [u32; INDEX_COUNT] = [
     0,  1,  2,  3, RESTART_INDEX,
     4,  5,  6,  7, RESTART_INDEX,
     8,  9, 10, 11, RESTART_INDEX,
    12, 13, 14, 15, RESTART_INDEX,
    16, 17, 18, 19, RESTART_INDEX,
    20, 21, 22, 23,
];
