//! Math type re-exports and BVH-specific aliases.
//!
//! Offsets are always three-component double precision vectors; the fixed
//! arity is carried by the type, so no length check against channels exists.

pub use glam::DVec3;
use serde::{Deserialize, Deserializer};

/// Joint offset relative to the parent joint.
pub type Offset = DVec3;

/// Create an offset from its components.
#[inline]
pub const fn offset(x: f64, y: f64, z: f64) -> Offset {
    DVec3::new(x, y, z)
}

/// Accepted JSON shapes for an offset.
#[derive(Deserialize)]
#[serde(untagged)]
enum OffsetRepr {
    Array([f64; 3]),
    Object { x: f64, y: f64, z: f64 },
}

/// Deserialize an offset from either `[x, y, z]` or `{ "x", "y", "z" }`.
pub fn deserialize_offset<'de, D>(deserializer: D) -> Result<Offset, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OffsetRepr::deserialize(deserializer)? {
        OffsetRepr::Array([x, y, z]) => offset(x, y, z),
        OffsetRepr::Object { x, y, z } => offset(x, y, z),
    })
}
