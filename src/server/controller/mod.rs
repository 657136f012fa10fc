//! HTTP request handlers and DTO conversion.

pub mod application;
pub mod board;
pub mod member;
