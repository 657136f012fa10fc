//! Server-side parameter models and entity-to-DTO conversions.

pub mod application;
pub mod member;
