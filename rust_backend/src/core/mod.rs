//! Core domain models for the bike-rental dashboard.
//!
//! This module defines the fundamental data structures used throughout the
//! aggregation layer: rental observations, their categorical dimensions,
//! the validated date window, and the shared error taxonomy.

pub mod domain;
pub mod error;
