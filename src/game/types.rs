//! Shared Types Module
//!
//! GPU vertex layout, the mesh accumulator, and the 2D primitive
//! builders every scene and HUD pass is assembled from. All geometry is
//! emitted directly in normalized device coordinates.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

// ============================================================================
// GPU VERTEX TYPES
// ============================================================================

/// Vertex for the 2D scene and overlay geometry.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex2 {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(Vertex2, [u8; 24]);

// ============================================================================
// MESH STRUCTURE
// ============================================================================

/// A mesh with vertices and indices, rebuilt from scratch every frame.
pub struct Mesh2 {
    pub vertices: Vec<Vertex2>,
    pub indices: Vec<u32>,
}

impl Mesh2 {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn merge(&mut self, other: &Mesh2) {
        let base_idx = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|i| i + base_idx));
    }

    /// Axis-aligned quad. `min`/`max` are opposite corners in NDC.
    pub fn push_rect(&mut self, min: Vec2, max: Vec2, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.push(Vertex2 {
            position: [min.x, min.y],
            color,
        });
        self.vertices.push(Vertex2 {
            position: [max.x, min.y],
            color,
        });
        self.vertices.push(Vertex2 {
            position: [max.x, max.y],
            color,
        });
        self.vertices.push(Vertex2 {
            position: [min.x, max.y],
            color,
        });
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Filled circle as a triangle fan around the center.
    pub fn push_circle(&mut self, center: Vec2, radius: Vec2, segments: u32, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.push(Vertex2 {
            position: [center.x, center.y],
            color,
        });
        for i in 0..=segments {
            let a = (i as f32 / segments as f32) * std::f32::consts::TAU;
            self.vertices.push(Vertex2 {
                position: [center.x + a.cos() * radius.x, center.y + a.sin() * radius.y],
                color,
            });
        }
        for i in 0..segments {
            self.indices
                .extend_from_slice(&[base, base + 1 + i, base + 2 + i]);
        }
    }

    /// Constant-thickness line segment rendered as a quad.
    ///
    /// `half_width` is in NDC units per axis, so callers pass an
    /// aspect-corrected pair when the field is not square.
    pub fn push_line(&mut self, from: Vec2, to: Vec2, half_width: Vec2, color: [f32; 4]) {
        let dir = to - from;
        let len = dir.length();
        if len <= f32::EPSILON {
            return;
        }
        let n = Vec2::new(-dir.y, dir.x) / len;
        let offset = n * half_width;

        let base = self.vertices.len() as u32;
        for p in [from + offset, to + offset, to - offset, from - offset] {
            self.vertices.push(Vertex2 {
                position: [p.x, p.y],
                color,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Dashed polyline: alternating on/off runs of `dash_len` along each
    /// segment of `points`.
    pub fn push_dashed(
        &mut self,
        points: &[Vec2],
        dash_len: f32,
        half_width: Vec2,
        color: [f32; 4],
    ) {
        if dash_len <= 0.0 {
            return;
        }
        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let seg = to - from;
            let len = seg.length();
            if len <= f32::EPSILON {
                continue;
            }
            let dir = seg / len;
            let mut t = 0.0;
            let mut draw = true;
            while t < len {
                let end = (t + dash_len).min(len);
                if draw {
                    self.push_line(from + dir * t, from + dir * end, half_width, color);
                }
                draw = !draw;
                t = end;
            }
        }
    }
}

impl Default for Mesh2 {
    fn default() -> Self {
        Self::new()
    }
}
