//! Galena - mining permit administration backend
//!
//! This library provides the core functionality for the Galena permit
//! administration services. It exposes all modules for testing purposes.

pub mod authz;
pub mod docman;
pub mod entities;
pub mod errors;
pub mod settings;
pub mod storage;
pub mod web;
