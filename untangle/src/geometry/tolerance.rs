// Centralized tolerances and helpers for the geometry layer.

/// Denominator guard for the segment-intersection linear system. Segments
/// whose denominator falls under this are treated as parallel/collinear and
/// never reported as crossing. Deliberate simplification: a true collinear
/// overlap is not flagged either; no graph in the fixed catalog produces one.
pub const EPS_DENOM: f64 = 1e-10;

#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}
