//! # Bylines Architecture
//!
//! Bylines is a **UI-agnostic writer-statistics library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (name trimming, date parsing)          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returning CmdResult            │
//! │  - Persists after every mutation; downgrades failed saves   │
//! │    to warnings                                              │
//! └─────────────────────────────────────────────────────────────┘
//!                │                             │
//!                ▼                             ▼
//! ┌──────────────────────────────┐ ┌──────────────────────────────┐
//! │  Roster (roster.rs)          │ │  Report Engine (report/)     │
//! │  - Id assignment + repair    │ │  - layout → raster → PNG     │
//! │  - Ranked leaderboard        │ │  - Stateless between calls   │
//! └──────────────────────────────┘ └──────────────────────────────┘
//!                │
//!                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (store/)                                 │
//! │  - Abstract Persistence trait, whole-document JSON          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, roster, store, report), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a desktop shell, or any
//! other UI; the rendered report comes back as bytes, not as a file the
//! core decided to write.
//!
//! ## Concurrency Model
//!
//! Everything is single-threaded and synchronous. The persisted document is
//! one JSON file with last-writer-wins semantics and no locking; a deployment
//! serving concurrent callers must wrap mutations in its own mutual-exclusion
//! scope. The report engine holds no shared state and can be called from
//! anywhere.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per operation
//! - [`roster`]: The writer store: id assignment, repair, ranking
//! - [`store`]: Persistence abstraction and implementations
//! - [`report`]: The report layout engine (layout, paint, font, raster)
//! - [`model`]: Core data types (`Writer`, `Stats`, `StoreDocument`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: argument parsing and printing live in the binary, not here

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod roster;
pub mod store;
