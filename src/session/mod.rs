//! Session orchestration between the settings panel and the canvas
//!
//! This module contains:
//! - Typed request and response messages
//! - The host canvas trait and an in-memory canvas
//! - The controller and its per-session context

/// Host canvas abstraction
pub mod canvas;
/// Request handling and session state
pub mod controller;
/// Panel messages
pub mod message;

pub use canvas::{Canvas, MemoryCanvas, NodeId};
pub use controller::{SessionContext, SessionController};
pub use message::{Request, Response};
