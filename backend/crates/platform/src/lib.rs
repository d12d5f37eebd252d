//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the shared technical foundations of the gateway:
//! - Bearer token extraction and the internal system-token bypass
//! - The upstream backend transport (reqwest) and its error classification
//! - Remote media fetching for the image proxy
//! - Environment configuration
//! - Constant-time secret comparison

pub mod bearer;
pub mod config;
pub mod crypto;
pub mod media;
pub mod upstream;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;
