//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Authenticated-principal extraction from gateway headers
//! - Outbound HTTP client construction for upstream service adapters

pub mod http;
pub mod principal;
