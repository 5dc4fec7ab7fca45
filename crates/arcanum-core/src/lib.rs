//! Arcanum Core Types and Definitions
//!
//! This crate provides the geometric foundation for Arcanum magic-circle
//! diagrams. It includes:
//!
//! - **Geometry**: Points, sizes and vertex placement ([`geometry`] module)
//! - **Paths**: Pen-up/pen-down path operations ([`path::PathOp`], [`path::Path`])
//! - **Shapes**: Star polygons, approximated circles and composite sigils ([`shape`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Stroke definitions and the [`draw::RenderTarget`] seam used by renderers

pub mod color;
pub mod draw;
pub mod geometry;
pub mod path;
pub mod shape;

mod error;

pub use error::Error;
