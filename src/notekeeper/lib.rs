//! # Notekeeper Architecture
//!
//! Notekeeper is a single-user notebook holding two kinds of notes: free-text notes and
//! reminders with a done/not-done status. Every edit is kept: a note never overwrites its
//! previous content, it appends a new version to its own history.
//!
//! Like most small tools that grow, the interesting part is not the terminal menu but the
//! data model underneath it, so the crate is a library first and a binary second.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Text menu, raw string/integer input, coloured output     │
//! │  - Captures timestamps, the ONLY place reading the clock    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Notebook             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per file, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (notebook.rs, note.rs, model.rs, store/)              │
//! │  - Identity, version history, rendering                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! The [`notebook::Notebook`] mints identifiers from a counter that only moves forward, so an
//! id is never handed out twice during a session. `Notebook::add` rejects an id that is
//! already present instead of trusting the caller.
//!
//! ## Time
//!
//! Nothing below the CLI layer reads the clock. Creation and update timestamps are
//! pre-formatted strings passed in by the caller (see [`timestamp`]), which keeps the core
//! deterministic under test.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: The generic versioned store and the `HasId` trait
//! - [`model`]: Plain note data (`NoteEntity`, `NoteKind`)
//! - [`note`]: A note with its owned version history
//! - [`notebook`]: The ordered note collection
//! - [`labels`]: Localized words used by the renderers
//! - [`config`]: Configuration management
//! - [`timestamp`]: Formatting of captured instants
//! - [`error`]: Error types
//! - `cli`: Menu loop, console I/O and argument parsing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod labels;
pub mod model;
pub mod note;
pub mod notebook;
pub mod store;
pub mod timestamp;
