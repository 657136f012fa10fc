//! Business logic orchestration between controllers and the data layer.

pub mod application;

#[cfg(test)]
mod test;
