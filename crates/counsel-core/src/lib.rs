//! # counsel-core
//!
//! Core types, labels, and error types for Counsel.
//!
//! This crate provides the foundational types shared across all Counsel crates:
//! - Entity structs for the CRM records (clients, campaigns, leads, compliance rules)
//! - Label enums with their display strings and case-insensitive parsing
//! - Id aliases and the canonical practice-area catalog
//! - Form types that validate user input before it reaches the store
//! - Response shapes produced by the derived views
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod forms;
pub mod ids;
pub mod responses;
