#![forbid(unsafe_code)]

//! `framefit-web` wires the deterministic `framefit-core` dispatch into a
//! real browser page via `wasm-bindgen`.
//!
//! Host side: `FrameFitHost` subscribes once to the window's `message`
//! event for the lifetime of the page, snapshots the document's iframes
//! on every message, and applies the resulting mutations to
//! `style.height`. The handler never throws; anything unexpected
//! downgrades to a log line so one malformed message can never detach
//! the subscription.
//!
//! Embed side: `post_height_report` lets an embedded dashboard report
//! its rendered content height to the parent page whenever it changes.
//!
//! The DOM-independent pieces live in [`apply`] and build on every
//! target; the bindings themselves only exist on `wasm32`.

pub mod apply;

#[cfg(target_arch = "wasm32")]
pub mod embed;
#[cfg(target_arch = "wasm32")]
pub mod host;

#[cfg(target_arch = "wasm32")]
pub use host::FrameFitHost;
