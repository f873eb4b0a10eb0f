//! # Core Application Logic
//!
//! This module contains wordcard's state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Event / Command      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │  Executor  │
//!         │  Adapter   │                  │ (services) │
//!         │ (ratatui)  │                  │            │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `State` struct holding all application state
//! - [`action`]: `Event` (what happened) and `Command` (what to do next)
//! - [`focus`]: Focus ring and key routing
//! - [`widgets`]: Timer, spinner, list and input state machines
//! - [`update`]: The reducer tying it all together
//! - [`config`]: Layered configuration
//! - [`key`]: UI-independent key values

pub mod action;
pub mod config;
pub mod focus;
pub mod key;
pub mod state;
pub mod update;
pub mod widgets;
