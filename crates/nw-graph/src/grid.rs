//! Square-grid node layouts.

use nw_core::Vec3;

/// A square grid of nodes centred on the origin in the `z = 0` plane.
///
/// Coordinates run from `-half_extent` to `+half_extent` inclusive in steps
/// of `span` on both axes.  Nodes are emitted column-major: `x` outer, `y`
/// inner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub half_extent: i32,
    pub span:        i32,
}

impl Default for GridLayout {
    /// 15 × 15 nodes, 40 units apart.
    fn default() -> Self {
        Self { half_extent: 280, span: 40 }
    }
}

impl GridLayout {
    pub fn new(half_extent: i32, span: i32) -> Self {
        Self { half_extent, span }
    }

    /// Nodes per row.  Zero when `span` is not positive or the extent is
    /// negative.  Computed in `i64` so any `i32` extent is safe.
    pub fn side(&self) -> usize {
        if self.span <= 0 || self.half_extent < 0 {
            return 0;
        }
        (2 * self.half_extent as i64 / self.span as i64) as usize + 1
    }

    pub fn node_count(&self) -> usize {
        self.side() * self.side()
    }

    /// Threshold that connects orthogonal and diagonal grid neighbours but
    /// not nodes two steps apart.
    pub fn edge_threshold(&self) -> f32 {
        self.span as f32 * 3f32.sqrt()
    }

    /// Node positions in column-major order.
    pub fn positions(&self) -> Vec<Vec3> {
        let side = self.side();
        let mut out = Vec::with_capacity(side * side);
        for ix in 0..side {
            let x = -(self.half_extent as i64) + ix as i64 * self.span as i64;
            for iy in 0..side {
                let y = -(self.half_extent as i64) + iy as i64 * self.span as i64;
                out.push(Vec3::new(x as f32, y as f32, 0.0));
            }
        }
        out
    }
}
