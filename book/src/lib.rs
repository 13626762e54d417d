//! # UniBook Book Library
//!
//! Core library for the UniBook terminal contact manager. This library
//! provides the domain model (modules, professors, students and their
//! validated value types), JSON-backed storage, and bundled sample data.
//!
//! ## Modules
//!
//! - [`index`] - One-based indices as displayed to the user
//! - [`model`] - Domain model: value types, persons, modules, the book
//! - [`storage`] - JSON persistence for the book and user preferences
//! - [`testutil`] - Fluent fixture builders (behind the `test-utils` feature)

pub mod index;
pub mod model;
pub mod storage;

#[cfg(any(test, feature = "test-utils"))]
pub mod testutil;
