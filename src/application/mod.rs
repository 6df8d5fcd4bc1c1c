// SPDX-License-Identifier: MPL-2.0
//! Application layer - capability contracts the host must provide.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The plugin core depends only on these traits
//! - Infrastructure adapters and host bindings implement them
//! - Nothing in this layer touches a concrete host object

pub mod port;
