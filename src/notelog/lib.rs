//! # Notelog Architecture
//!
//! Notelog is a **UI-agnostic activity log**. The terminal session shipped with the crate
//! is one client of the library, not the library itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the session, renders output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the loaded configuration              │
//! │  - Turns "now" into a formatted timestamp                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns `CmdResult`                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` trait, `InMemoryStore`                       │
//! │  - Observer subscriptions fired after every write           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Store, Passed Explicitly
//!
//! There is no process-wide store. The client builds a [`api::NotelogApi`], which owns
//! its store, and hands `&mut` access to whatever needs to read or write it. The store
//! lives as long as the session does; notes are never written to disk.
//!
//! ## Staying in Sync
//!
//! Views register a callback with [`api::NotelogApi::subscribe`]. The store calls every
//! subscriber after each write has fully completed, so a view that re-reads on
//! notification always sees the new state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, in-memory store and observers
//! - [`model`]: Read-side types (`Entry`, `DisplayEntry`, `Alignment`)
//! - [`timestamp`]: Timestamp formatting for the caller side of a write
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod timestamp;
