//! Server-side API backend and business logic.
//!
//! This module contains the backend for the application portal: API endpoints,
//! business logic, and data access. The backend uses Axum as the web framework
//! and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Operation-specific parameter types and conversions
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, upload directory)
//! - **Startup** (`startup`) - Database connection and migration on boot
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives an HTTP request and routes to the controller
//! 2. **Controller** parses the body (JSON or multipart), calls the service
//! 3. **Service** validates, orchestrates data operations
//! 4. **Data** queries the database through repositories
//! 5. **Controller** converts the result to a DTO and returns the response
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
