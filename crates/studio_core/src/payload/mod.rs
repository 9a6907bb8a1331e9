//! Typed payloads for every result category.
//!
//! All structs decode with `#[serde(default)]` so partially-filled backend
//! output degrades to placeholders instead of failing. Fields that arrive
//! either as a bare string or as an object keep both shapes as explicit
//! untagged unions, normalized through accessor methods.
pub mod analyzer;
pub mod instagram;
pub mod youtube;
