//! Version checking layer
//!
//! Compares a locally known version with the latest matching tag published
//! in a GitHub or GitLab repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Checker   │────▶│  Provider   │────▶│   Extract   │
//! │  (resolve)  │     │ (HTTP GET)  │     │ (tag names) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  Providers  │                         │     Tag     │
//! │(github, lab)│                         │(parse, cmp) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Provider resolution and the public comparison entry points
//! - [`provider`]: Provider trait for fetching the latest tag of a repository
//! - [`providers`]: Concrete providers (GitHub, GitLab)
//! - [`extract`]: Tag name scanning of raw response bodies
//! - [`tag`]: Tag normalization, grammar and ordering
//! - [`error`]: Error types for provider resolution and remote lookups

pub mod checker;
pub mod error;
pub mod extract;
pub mod provider;
pub mod providers;
pub mod tag;
