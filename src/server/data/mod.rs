//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally; all
//! queries, inserts, updates, and deletes go through here.

pub mod application;
pub mod board_member;
pub mod department;
pub mod member;

#[cfg(test)]
mod test;
