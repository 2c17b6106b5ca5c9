#![forbid(unsafe_code)]

//! Wire schema for cross-document height reports.
//!
//! An embedded dashboard announces its rendered content height to the
//! hosting page as a JSON message:
//!
//! ```json
//! { "type": "dashboard-height", "dashboard": "industry-outlook", "height": 450 }
//! ```
//!
//! [`decode_message`] accepts the raw payload of a cross-document
//! message. The channel is shared with unrelated traffic, so anything
//! that does not carry the exact `"dashboard-height"` tag decodes to
//! `Ok(None)` rather than an error. `Err` is reserved for payloads that
//! claim the tag but are malformed (missing fields, unrecognized
//! dashboard, non-finite or negative height) — callers log and drop
//! those without ever applying them.

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardId;

/// Discriminator tag identifying a height report on the wire.
pub const HEIGHT_MESSAGE_TYPE: &str = "dashboard-height";

/// A validated height report from an embedded dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightReport {
    /// Which dashboard is reporting.
    pub dashboard: DashboardId,
    /// Rendered content height in logical pixels. Finite and non-negative.
    pub height: f64,
}

impl HeightReport {
    /// Construct a report, validating the height.
    pub fn new(dashboard: DashboardId, height: f64) -> Result<Self, MessageDecodeError> {
        if !height.is_finite() || height < 0.0 {
            return Err(MessageDecodeError::InvalidHeight(height));
        }
        Ok(Self { dashboard, height })
    }

    /// Encode as the JSON wire payload an embedded dashboard posts.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        let wire = WireMessage {
            kind: HEIGHT_MESSAGE_TYPE,
            dashboard: self.dashboard.as_str(),
            height: self.height,
        };
        // Serialization of three plain fields cannot fail.
        serde_json::to_string(&wire).unwrap_or_default()
    }
}

/// Errors from decoding a payload that carried the height-report tag.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageDecodeError {
    /// `dashboard` field absent.
    MissingDashboard,
    /// `dashboard` field present but not a recognized identifier.
    UnknownDashboard(String),
    /// `height` field absent or not a number.
    MissingHeight,
    /// `height` is negative, NaN, or infinite.
    InvalidHeight(f64),
}

impl core::fmt::Display for MessageDecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDashboard => write!(f, "height report missing dashboard field"),
            Self::UnknownDashboard(id) => write!(f, "unknown dashboard identifier: {id:?}"),
            Self::MissingHeight => write!(f, "height report missing numeric height field"),
            Self::InvalidHeight(h) => write!(f, "invalid height: {h}"),
        }
    }
}

impl std::error::Error for MessageDecodeError {}

#[derive(Serialize)]
struct WireMessage<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    dashboard: &'a str,
    height: f64,
}

/// Permissive deserialization target for arbitrary channel traffic.
#[derive(Deserialize)]
struct RawMessage {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    dashboard: Option<String>,
    #[serde(default)]
    height: Option<serde_json::Value>,
}

/// Decode one cross-document message payload.
///
/// Returns `Ok(None)` for traffic that is not a height report: non-JSON
/// payloads, non-object JSON, and objects without the exact
/// [`HEIGHT_MESSAGE_TYPE`] tag. Returns `Err` only when the tag matched
/// but the remaining fields do not form a valid report.
pub fn decode_message(payload: &str) -> Result<Option<HeightReport>, MessageDecodeError> {
    let Ok(raw) = serde_json::from_str::<RawMessage>(payload) else {
        return Ok(None);
    };
    if raw.kind.as_deref() != Some(HEIGHT_MESSAGE_TYPE) {
        return Ok(None);
    }

    let dashboard = raw.dashboard.ok_or(MessageDecodeError::MissingDashboard)?;
    let dashboard = DashboardId::parse(&dashboard)
        .ok_or_else(|| MessageDecodeError::UnknownDashboard(dashboard))?;

    let height = raw
        .height
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .ok_or(MessageDecodeError::MissingHeight)?;

    HeightReport::new(dashboard, height).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_well_formed_report() {
        let report = decode_message(
            r#"{"type":"dashboard-height","dashboard":"industry-outlook","height":450}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(report.dashboard, DashboardId::IndustryOutlook);
        assert_eq!(report.height, 450.0);
    }

    #[test]
    fn wrong_type_tag_is_noise() {
        assert_eq!(
            decode_message(r#"{"type":"dashboard-width","dashboard":"industry-outlook","height":450}"#),
            Ok(None)
        );
        assert_eq!(decode_message(r#"{"dashboard":"industry-outlook","height":450}"#), Ok(None));
    }

    #[test]
    fn non_json_payload_is_noise() {
        assert_eq!(decode_message("setImmediate$0.1$"), Ok(None));
        assert_eq!(decode_message(""), Ok(None));
        assert_eq!(decode_message("[1,2,3]"), Ok(None));
    }

    #[test]
    fn unknown_dashboard_is_reported() {
        let err = decode_message(r#"{"type":"dashboard-height","dashboard":"weather","height":10}"#)
            .unwrap_err();
        assert_eq!(err, MessageDecodeError::UnknownDashboard("weather".into()));
    }

    #[test]
    fn map_dashboard_still_decodes() {
        // Safelisting happens at dispatch, not decode.
        let report = decode_message(
            r#"{"type":"dashboard-height","dashboard":"map-dashboard","height":600}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(report.dashboard, DashboardId::Map);
    }

    #[test]
    fn missing_or_non_numeric_height_is_rejected() {
        let payload = r#"{"type":"dashboard-height","dashboard":"merchant-dashboard"}"#;
        assert_eq!(decode_message(payload), Err(MessageDecodeError::MissingHeight));

        let payload = r#"{"type":"dashboard-height","dashboard":"merchant-dashboard","height":"tall"}"#;
        assert_eq!(decode_message(payload), Err(MessageDecodeError::MissingHeight));
    }

    #[test]
    fn negative_height_is_rejected() {
        let payload = r#"{"type":"dashboard-height","dashboard":"merchant-dashboard","height":-5}"#;
        assert_eq!(decode_message(payload), Err(MessageDecodeError::InvalidHeight(-5.0)));
    }

    #[test]
    fn encode_round_trips() {
        let report = HeightReport::new(DashboardId::MerchantDashboard, 512.0).unwrap();
        let decoded = decode_message(&report.to_json_string()).unwrap().unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn constructor_rejects_non_finite_height() {
        assert!(HeightReport::new(DashboardId::IndustryOutlook, f64::NAN).is_err());
        assert!(HeightReport::new(DashboardId::IndustryOutlook, f64::INFINITY).is_err());
    }
}
