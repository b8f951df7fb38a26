//! Logship Core
//!
//! Core types for the logship log-shipping client.
//!
//! This crate contains:
//! - Domain types: the structured log records submitted to an ingestion endpoint

pub mod domain;
