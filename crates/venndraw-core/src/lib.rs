//! venndraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by the venndraw
//! library and CLI. It includes:
//!
//! - **Regions**: Set counts and combination keys ([`region`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawing primitives rendered to layered SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod region;
