//! Entity factories for test data.
//!
//! Each factory inserts a row with sensible defaults so tests only spell out
//! the columns they care about.

pub mod application;
pub mod board_member;
pub mod department;
pub mod member;
