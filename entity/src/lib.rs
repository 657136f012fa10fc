//! SeaORM entity models for the club application portal.

pub mod prelude;

pub mod application;
pub mod board_member;
pub mod department;
pub mod member;
