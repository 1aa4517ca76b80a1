//! Arrange Core Types and Definitions
//!
//! This crate provides the foundational types shared by the arrangement
//! library and its hosts. It includes:
//!
//! - **Geometry**: 3D points, axes, and placement directions ([`geometry`] module)
//! - **Items**: The host seam for named, positionable items ([`item`] module)

pub mod geometry;
pub mod item;
