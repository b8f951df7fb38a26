//! Core domain types
//!
//! This module contains the record structures shipped to an ingestion
//! endpoint. Records are plain serde types; the wire shape is exactly what
//! serde produces for them.

pub mod log;
