//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact-directory library**. The interactive
//! terminal session is one client of it; nothing below `main.rs` knows about
//! stdout, prompts, or exit codes.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Reads session lines, renders templates, terminal I/O     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One Action enum, one update() dispatch                   │
//! │  - Resolves selectors against the current view              │
//! │  - Owns the navigation state (active filter)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns Result<CmdResult>           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait, InMemoryStore (the only backend)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Contacts carry a stable `Uuid` assigned at creation; every update and
//! delete addresses the store by that id. User-facing indexes (`1`, `2`, ...)
//! are ephemeral positions in the currently filtered view, translated to ids
//! by `index.rs` right before each operation.
//!
//! ## State model
//!
//! The store is seeded once at startup and lives for the session. Filtering
//! never mutates it: `directory.rs` computes the visible subset as a pure
//! function of a snapshot, so there is no intermediate state to suppress and
//! nothing to re-render until the final set is known.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — `Action` in, `CmdResult` out
//! - [`commands`]: business logic for each operation
//! - [`directory`]: filtering and category enumeration
//! - [`store`]: the storage trait and in-memory backend
//! - [`model`]: `Contact`, `ContactForm`, defaults and photo normalization
//! - [`index`]: display indexes and selectors
//! - [`route`]: URL-fragment navigation
//! - [`config`]: presentation/startup configuration
//! - [`seed`]: demo contacts and seed-file loading
//! - [`error`]: error types
//! - `cli`: rendering and arg parsing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod index;
pub mod model;
pub mod route;
pub mod seed;
pub mod store;
