#![forbid(unsafe_code)]

//! Deterministic dispatch core for the host-side height listener.
//!
//! The host page subscribes once, for its whole lifetime, to the
//! cross-document message channel. Each incoming payload is pushed
//! through [`HeightListener::dispatch`] together with a fresh snapshot
//! of the document's iframes; the result is a list of frame mutations
//! for the caller to apply plus a structured log record. The dispatch
//! itself never touches the DOM and holds no per-message state, so
//! identical inputs always produce identical mutations.
//!
//! Gate order: origin → wire filter → safelist → target resolution →
//! policy. A payload rejected at any gate produces zero mutations and
//! an [`HeightOutcome::Ignored`] record; nothing here is an error the
//! host should surface, because the channel is shared with unrelated
//! traffic.

use crate::dashboard::DashboardId;
use crate::message::{MessageDecodeError, decode_message};
use crate::policy::{DEFAULT_HEIGHT_POLICY, HeightPolicy};

/// Which message origins the listener accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Accept reports from any origin. Matches the historical embed
    /// setup, where the dashboards are served from a known host but the
    /// page never checked. Tighten to an allowlist for untrusted embeds.
    #[default]
    Any,
    /// Accept reports only from the listed origins (exact match).
    Allowlist(Vec<String>),
}

impl OriginPolicy {
    #[must_use]
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Allowlist(origins) => origins.iter().any(|allowed| allowed == origin),
        }
    }
}

/// Host listener configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ListenerConfig {
    /// How reported heights map to applied heights.
    pub policy: HeightPolicy,
    /// Which message origins are trusted.
    pub origins: OriginPolicy,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            policy: DEFAULT_HEIGHT_POLICY,
            origins: OriginPolicy::Any,
        }
    }
}

/// One iframe observed in the host document at dispatch time.
///
/// The registry is implicit: callers rebuild it from the live document
/// for every message rather than keeping one across messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    /// The frame's source URL as the document reports it.
    pub src: String,
}

impl FrameSnapshot {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// A height to apply to one frame of the dispatch-time snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMutation {
    /// Index into the `frames` slice handed to dispatch.
    pub frame_index: usize,
    /// Height to apply, in logical pixels.
    pub height_px: f64,
}

/// Why a payload produced no mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum HeightIgnoredReason {
    /// Payload from an origin outside the configured allowlist.
    OriginNotAllowed,
    /// Unrelated channel traffic: not a height report at all.
    NotHeightReport,
    /// Carried the height-report tag but failed validation.
    MalformedReport(MessageDecodeError),
    /// Recognized dashboard outside the resize safelist (map dashboard).
    DashboardNotResizable(DashboardId),
}

/// Outcome category for one dispatched payload.
#[derive(Debug, Clone, PartialEq)]
pub enum HeightOutcome {
    /// Height applied to `frames` matching iframes.
    Applied { frames: usize },
    /// Valid report, but no iframe in the snapshot matched its pattern.
    NoMatchingFrame,
    /// Payload dropped before target resolution.
    Ignored(HeightIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightLogEntry {
    /// Reporting dashboard, when the payload got far enough to name one.
    pub dashboard: Option<DashboardId>,
    /// Reported height, when the payload carried a valid one.
    pub reported_height: Option<f64>,
    /// Height actually applied, when any frame matched.
    pub applied_height: Option<f64>,
    pub outcome: HeightOutcome,
}

/// Result of dispatching one payload against one frame snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightDispatch {
    /// Frame mutations for the caller to apply, in snapshot order.
    pub mutations: Vec<FrameMutation>,
    pub log: HeightLogEntry,
}

impl HeightDispatch {
    fn ignored(reason: HeightIgnoredReason, dashboard: Option<DashboardId>) -> Self {
        Self {
            mutations: Vec::new(),
            log: HeightLogEntry {
                dashboard,
                reported_height: None,
                applied_height: None,
                outcome: HeightOutcome::Ignored(reason),
            },
        }
    }
}

/// Page-lifetime host listener.
#[derive(Debug, Clone, Default)]
pub struct HeightListener {
    config: ListenerConfig,
}

impl HeightListener {
    #[must_use]
    pub fn new(config: ListenerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ListenerConfig {
        &self.config
    }

    /// Dispatch one cross-document payload against the current iframes.
    ///
    /// `payload` is the message data serialized to a JSON string;
    /// `origin` is the sender origin as reported by the channel.
    #[must_use]
    pub fn dispatch(
        &self,
        payload: &str,
        origin: &str,
        frames: &[FrameSnapshot],
    ) -> HeightDispatch {
        if !self.config.origins.allows(origin) {
            return HeightDispatch::ignored(HeightIgnoredReason::OriginNotAllowed, None);
        }

        let report = match decode_message(payload) {
            Ok(Some(report)) => report,
            Ok(None) => {
                return HeightDispatch::ignored(HeightIgnoredReason::NotHeightReport, None);
            }
            Err(err) => {
                return HeightDispatch::ignored(HeightIgnoredReason::MalformedReport(err), None);
            }
        };

        if !report.dashboard.is_resizable() {
            return HeightDispatch::ignored(
                HeightIgnoredReason::DashboardNotResizable(report.dashboard),
                Some(report.dashboard),
            );
        }

        let applied = self.config.policy.applied_height(report.height);
        let mutations: Vec<FrameMutation> = frames
            .iter()
            .enumerate()
            .filter(|(_, frame)| report.dashboard.matches_frame_src(&frame.src))
            .map(|(frame_index, _)| FrameMutation {
                frame_index,
                height_px: applied,
            })
            .collect();

        let outcome = if mutations.is_empty() {
            HeightOutcome::NoMatchingFrame
        } else {
            HeightOutcome::Applied {
                frames: mutations.len(),
            }
        };
        let applied_height = (!mutations.is_empty()).then_some(applied);

        HeightDispatch {
            mutations,
            log: HeightLogEntry {
                dashboard: Some(report.dashboard),
                reported_height: Some(report.height),
                applied_height,
                outcome,
            },
        }
    }
}
