#![forbid(unsafe_code)]

//! `framefit-core` is the deterministic core of the dashboard
//! height-synchronization handshake: embedded dashboards report their
//! rendered content height to the hosting page, and the host resizes
//! the matching iframes to fit.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment feeds payloads and
//!   iframe snapshots in; mutations come back out. No DOM access here.
//! - **Deterministic dispatch**: identical inputs always yield identical
//!   mutations, so every observable behavior is unit-testable on native.
//! - **Drop, don't throw**: the message channel is shared with unrelated
//!   traffic; nothing a sender posts can panic the listener or detach it.
//!
//! The `wasm-bindgen` wiring lives in `framefit-web`, which wraps this
//! crate the way a JS host would.

pub mod dashboard;
pub mod listener;
pub mod message;
pub mod policy;

pub use dashboard::DashboardId;
pub use listener::{
    FrameMutation, FrameSnapshot, HeightDispatch, HeightIgnoredReason, HeightListener,
    HeightLogEntry, HeightOutcome, ListenerConfig, OriginPolicy,
};
pub use message::{HEIGHT_MESSAGE_TYPE, HeightReport, MessageDecodeError, decode_message};
pub use policy::{DEFAULT_HEIGHT_POLICY, HeightPolicy, PADDED_MARGIN_PX};
