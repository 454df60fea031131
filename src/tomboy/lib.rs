//! # Tomboy Export Architecture
//!
//! `tomboy` reads a Tomboy note archive and turns it into plain, readable text.
//! Like most of our tools it is a small library with a thin CLI on top: the binary
//! only parses flags, installs logging and prints what the library hands back.
//!
//! ## The Archive Layout
//!
//! ```text
//! <in>/
//! ├── manifest.xml              # <manifest revision="N"><note id=".." rev=".."/>...</manifest>
//! └── 0/
//!     └── <rev>/
//!         └── <id>.note         # <note><title>..</title><text>..</text></note>
//! ```
//!
//! The manifest lists every note with the revision directory that holds it. Notes
//! are always resolved under the `0` root using each entry's own `rev`, never the
//! manifest's top-level revision.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, installs the log subscriber                │
//! │  - The ONLY place that knows about stdout and exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the config and source    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Walks the manifest, decides fatal vs. skipped failures   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Archive Layer (archive.rs, paths.rs, codec.rs, source/)    │
//! │  - Path resolution, XML decoding, DocumentSource trait      │
//! │  - FileSource (production), MemorySource (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; whoever runs the library decides where the
//! events end up.
//!
//! ## Failure Tiers
//!
//! - A manifest that cannot be read or decoded is fatal: the command returns `Err`.
//! - A note that cannot be resolved, read or decoded is skipped: it is logged,
//!   recorded in [`commands::CmdResult::skipped`], and the run carries on.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the binary
//! - [`commands`]: `convert` and `paths` operations
//! - [`archive`]: Loading manifests and notes from a source
//! - [`paths`]: Note path resolution and id validation
//! - [`codec`]: XML decoding
//! - [`source`]: Document access abstraction and implementations
//! - [`model`]: `Manifest`, `NoteEntry`, `Note`, `Content`
//! - [`config`]: Run configuration
//! - [`error`]: Error types

pub mod api;
pub mod archive;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod source;
