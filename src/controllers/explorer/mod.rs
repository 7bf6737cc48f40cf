//! The explorer driving loop.
//!
//! Owns the mutable viewport, consumes zoom/save events, and re-invokes the
//! render engine on an immutable snapshot per frame.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: [`ExplorerEvent`] values describing zoom and save requests
//! - **Output**: [`FramePresenterPort`] for frames, [`FilePresenterPort`]
//!   for saved images
//! - **Core**: domain actions from `core/` do the actual computation
//!
//! [`ExplorerEvent`]: events::ExplorerEvent
//! [`FramePresenterPort`]: ports::presenter::FramePresenterPort
//! [`FilePresenterPort`]: ports::file_presenter::FilePresenterPort

pub mod config;
pub mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use config::ExplorerConfig;
pub use controller::{ExplorerController, ExplorerError};
pub use events::ExplorerEvent;
