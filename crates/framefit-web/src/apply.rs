#![forbid(unsafe_code)]

//! DOM-independent pieces of the apply step: CSS value formatting and
//! outcome logging. Kept out of the wasm-gated modules so they run in
//! native unit tests.

use framefit_core::{HeightDispatch, HeightIgnoredReason, HeightOutcome};
use tracing::{debug, trace, warn};

/// Format an applied height as a CSS length for `style.height`.
///
/// Reported heights are whole pixels in practice; fractional values
/// survive as-is since CSS accepts them.
#[must_use]
pub fn css_height_px(height_px: f64) -> String {
    if height_px.fract() == 0.0 {
        format!("{}px", height_px as i64)
    } else {
        format!("{height_px}px")
    }
}

/// Log one dispatch at a severity matching its outcome.
///
/// Unrelated channel traffic is `trace` (it is constant background
/// noise); payloads that claimed to be height reports but were dropped
/// are `warn`, because they usually mean a misconfigured embed.
pub fn log_dispatch(dispatch: &HeightDispatch) {
    match &dispatch.log.outcome {
        HeightOutcome::Applied { frames } => {
            debug!(
                dashboard = dispatch.log.dashboard.map(|d| d.as_str()),
                reported = dispatch.log.reported_height,
                applied = dispatch.log.applied_height,
                frames,
                "applied dashboard height report"
            );
        }
        HeightOutcome::NoMatchingFrame => {
            debug!(
                dashboard = dispatch.log.dashboard.map(|d| d.as_str()),
                "height report matched no iframe"
            );
        }
        HeightOutcome::Ignored(HeightIgnoredReason::NotHeightReport) => {
            trace!("ignored unrelated channel message");
        }
        HeightOutcome::Ignored(reason) => {
            warn!(?reason, "dropped height report");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn whole_pixel_heights_format_without_fraction() {
        assert_eq!(css_height_px(450.0), "450px");
        assert_eq!(css_height_px(0.0), "0px");
    }

    #[test]
    fn fractional_heights_survive() {
        assert_eq!(css_height_px(450.5), "450.5px");
    }
}
