//! Built-in resource classes, organized by API version.
//!
//! ```text
//! resources/
//!   mod.rs      <- This file
//!   v2/
//!     mod.rs    <- Classes for the v2 REST API
//! ```
//!
//! Custom classes can be declared the same way and added to a
//! [`ResourceRegistry`](crate::rest::ResourceRegistry).

pub mod v2;
