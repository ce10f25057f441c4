//! Server side of the drawable canvas demo.
//!
//! The browser-side canvas component renders, captures input and hands back a
//! snapshot: a pixel buffer plus a JSON list of drawn objects. This crate
//! serves the demo pages that mount the component and post-processes the
//! snapshots it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Snapshot types: drawn objects, canvas JSON, pixel data |
//! | [`pages`] | Page dispatch table and canvas setups |
//! | [`services`] | Geometry, annotation, arc length, PNG export, tables |
//! | [`routes`] | Axum router and handlers |
//! | [`state`] | Shared application state |
//! | [`config`] | Environment configuration |

pub mod config;
pub mod doc;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
