//! # Core Application Logic
//!
//! This module contains Lumina's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • streak / lexicon     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   fetch    │      │  storage   │
//!     │  Adapter   │      │ (HTTP I/O) │      │ (files)    │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`streak`]: Consecutive-day visit counting
//! - [`lexicon`]: Strong's-concordance word lookup
//! - [`favorites`]: Saved verses and their persistence
//! - [`config`]: Settings file, resolution, write-back
//! - [`reminder`]: Daily reminder schedule arithmetic
//! - [`playback`]: Track ids and the host audio interface

pub mod action;
pub mod config;
pub mod favorites;
pub mod lexicon;
pub mod playback;
pub mod reminder;
pub mod state;
pub mod streak;
