//! Static primitive geometry.
//!
//! Each builder runs exactly once at startup and produces a vertex set the
//! renderer uploads verbatim. Vertex counts and ordering are a fixed
//! contract consumed by the renderer's draw-call sequence; the functions
//! take compile-time constants and cannot fail at runtime.

use std::f32::consts::PI;

/// Baked radius of the speaker circle primitive.
pub const CIRCLE_RADIUS: f32 = 0.2;

/// Perimeter segment count of the speaker circle primitive.
pub const CIRCLE_SEGMENTS: u32 = 50;

/// Concentric ring count of the speaker grid (also the spoke count).
pub const GRID_RINGS: u32 = 10;

/// Samples per grid ring, tracing a full revolution. The first and last
/// sample coincide, closing the ring when drawn as a line strip.
pub const GRID_RING_SAMPLES: u32 = 51;

/// Outer radius of the grid rings and spokes.
pub const GRID_MAX_RADIUS: f32 = 0.2;

/// Builds a triangle-fan circle: center vertex followed by `segments + 1`
/// perimeter points over a full revolution (the final point duplicates the
/// first perimeter angle, closing the fan).
///
/// `segments = 50` produces exactly 52 vertices.
pub fn build_circle(radius: f32, segments: u32) -> Vec<[f32; 2]> {
    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push([0.0, 0.0]);

    for i in 0..=segments {
        let theta = 2.0 * PI * i as f32 / segments as f32;
        vertices.push([radius * theta.cos(), radius * theta.sin()]);
    }

    vertices
}

/// Expands a triangle-fan vertex set into a triangle-list index buffer.
///
/// wgpu has no TriangleFan topology, so the fan is drawn as `(0, i, i+1)`
/// triangles over the perimeter ring.
pub fn fan_indices(vertex_count: u32) -> Vec<u16> {
    debug_assert!(vertex_count >= 3 && vertex_count <= u16::MAX as u32 + 1);

    let mut indices = Vec::with_capacity((vertex_count as usize - 2) * 3);
    for i in 1..vertex_count as u16 - 1 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
    indices
}

/// Unit square centered at the origin, corners at ±0.5.
pub const fn build_rect() -> [[f32; 2]; 4] {
    [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]]
}

/// Two triangles over the unit square's four corners.
pub const RECT_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Builds the speaker grid: `ring_count` concentric rings (radii evenly
/// spaced up to [`GRID_MAX_RADIUS`], [`GRID_RING_SAMPLES`] points each)
/// immediately followed by `ring_count` two-point radial spokes.
///
/// The renderer draws ring `i` as the vertex range
/// `[i * GRID_RING_SAMPLES, (i + 1) * GRID_RING_SAMPLES)` and all spokes as
/// one batched line list over the final `2 * ring_count` vertices.
pub fn build_grid(ring_count: u32) -> Vec<[f32; 2]> {
    let samples = GRID_RING_SAMPLES;
    let mut vertices =
        Vec::with_capacity((ring_count * samples + ring_count * 2) as usize);

    for i in 1..=ring_count {
        let radius = (i as f32 / ring_count as f32) * GRID_MAX_RADIUS;
        for j in 0..samples {
            let theta = 2.0 * PI * j as f32 / (samples - 1) as f32;
            vertices.push([radius * theta.cos(), radius * theta.sin()]);
        }
    }

    for i in 0..ring_count {
        let theta = 2.0 * PI * i as f32 / ring_count as f32;
        vertices.push([0.0, 0.0]);
        vertices.push([GRID_MAX_RADIUS * theta.cos(), GRID_MAX_RADIUS * theta.sin()]);
    }

    vertices
}

/// Vertex range of grid ring `i`, for the renderer's per-ring draw calls.
#[inline]
pub fn grid_ring_range(i: u32) -> std::ops::Range<u32> {
    i * GRID_RING_SAMPLES..(i + 1) * GRID_RING_SAMPLES
}

/// Vertex range of the batched spoke line list.
#[inline]
pub fn grid_spoke_range(ring_count: u32) -> std::ops::Range<u32> {
    let start = ring_count * GRID_RING_SAMPLES;
    start..start + ring_count * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_with_50_segments_has_52_vertices() {
        // 1 center + 51 perimeter samples including the closing duplicate.
        assert_eq!(build_circle(0.2, 50).len(), 52);
    }

    #[test]
    fn circle_closes_the_loop() {
        let v = build_circle(0.2, 50);
        let first = v[1];
        let last = v[51];
        assert!((first[0] - last[0]).abs() < 1e-5);
        assert!((first[1] - last[1]).abs() < 1e-5);
    }

    #[test]
    fn circle_perimeter_lies_on_radius() {
        for p in build_circle(0.2, 50).iter().skip(1) {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - 0.2).abs() < 1e-5);
        }
    }

    #[test]
    fn fan_indices_cover_every_perimeter_edge() {
        let idx = fan_indices(52);
        assert_eq!(idx.len(), 50 * 3);
        assert_eq!(&idx[..3], &[0, 1, 2]);
        assert_eq!(&idx[idx.len() - 3..], &[0, 50, 51]);
    }

    // ── grid ──────────────────────────────────────────────────────────────

    #[test]
    fn grid_vertex_count_matches_contract() {
        // 10 rings × 51 samples + 10 spokes × 2 endpoints.
        assert_eq!(build_grid(10).len(), 10 * 51 + 20);
    }

    #[test]
    fn grid_rings_close_and_grow_outward() {
        let v = build_grid(10);
        for i in 0..10u32 {
            let range = grid_ring_range(i);
            let first = v[range.start as usize];
            let last = v[range.end as usize - 1];
            assert!((first[0] - last[0]).abs() < 1e-5);
            assert!((first[1] - last[1]).abs() < 1e-5);

            let r = (first[0] * first[0] + first[1] * first[1]).sqrt();
            let expected = (i + 1) as f32 / 10.0 * GRID_MAX_RADIUS;
            assert!((r - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn grid_spokes_run_center_to_boundary() {
        let v = build_grid(10);
        let range = grid_spoke_range(10);
        assert_eq!(range, 510..530);

        for pair in v[range.start as usize..range.end as usize].chunks(2) {
            assert_eq!(pair[0], [0.0, 0.0]);
            let r = (pair[1][0] * pair[1][0] + pair[1][1] * pair[1][1]).sqrt();
            assert!((r - GRID_MAX_RADIUS).abs() < 1e-5);
        }
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_is_unit_square_at_origin() {
        let v = build_rect();
        for corner in v {
            assert_eq!(corner[0].abs(), 0.5);
            assert_eq!(corner[1].abs(), 0.5);
        }
    }
}
