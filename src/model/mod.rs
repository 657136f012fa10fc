//! Wire-level DTOs and closed value sets shared by the client and server.

pub mod api;
pub mod application;
pub mod board;
pub mod department;
pub mod faculty;
pub mod member;
