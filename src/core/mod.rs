//! # Core Application Logic
//!
//! Screen state, navigation and the glue between background requests and
//! the UI thread. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (stack)    │
//!                    │  • Screens (state)      │
//!                    │  • Pending (bridge)     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │    API     │
//!     │  Adapter   │                          │  (reqwest) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigation`]: The `Navigator` stack and the `NavHandle` screens hold
//! - [`bridge`]: `Pending<T>`, one background result delivered to the UI thread
//! - [`screens`]: Per-screen state and input handling
//! - [`overlay`], [`report`]: Dialogs and the failure policy that raises them
//! - [`diff`]: Keyed list diffing for incremental updates
//! - [`config`]: Layered settings

pub mod action;
pub mod bridge;
pub mod config;
pub mod diff;
pub mod navigation;
pub mod overlay;
pub mod report;
pub mod screens;
