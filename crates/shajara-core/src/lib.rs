//! Shajara Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Shajara family
//! tree layout engine and its command-line front end. It includes:
//!
//! - **Identifiers**: Interned member identifiers ([`identifier::MemberId`])
//! - **Members**: The person record and its relationship fields ([`member`] module)
//! - **Geometry**: Logical-plane coordinates and bounds ([`geometry`] module)

pub mod geometry;
pub mod identifier;
pub mod member;
