//! List Items API
//!
//! A CRUD microservice for a single bounded-text "list item" resource,
//! served from PostgreSQL, MongoDB or memory behind one repository port.
//! Follows Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
