//! Post-processing services applied to canvas snapshots.
//!
//! ARCHITECTURE
//! ============
//! Each module is a small stateless transformation over drawn objects or
//! pixels. Route handlers in `crate::routes` stay focused on request decoding
//! and status mapping.

pub mod annotation;
pub mod arc_length;
pub mod geometry;
pub mod png_export;
pub mod snapshot;
pub mod table;
