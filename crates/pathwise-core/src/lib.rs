//! Interview engine, advisory services and port trait definitions for Pathwise.
//!
//! This crate defines the "ports" (provider, repository, hasher, extractor
//! and search traits) that the infrastructure layer implements. It depends
//! only on `pathwise-types` -- never on `pathwise-infra` or any database/IO
//! crate.

pub mod advisory;
pub mod extract;
pub mod interview;
pub mod llm;
pub mod persona;
pub mod repository;
pub mod search;
pub mod service;
