//! End-to-end observable properties of the host height listener, as a
//! hosting page would exercise them: raw payload in, frame mutations out.

use framefit_core::{
    FrameMutation, FrameSnapshot, HeightListener, HeightOutcome, HeightPolicy, ListenerConfig,
    OriginPolicy,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const INDUSTRY_FRAME: &str = "https://dash.example.com/industry_outlook_key_challenge.html";
const MERCHANT_FRAME: &str = "https://dash.example.com/embed/merchant-dashboard";
const UNRELATED_FRAME: &str = "https://cdn.example.com/newsletter-signup";

fn page_frames() -> Vec<FrameSnapshot> {
    vec![
        FrameSnapshot::new(INDUSTRY_FRAME),
        FrameSnapshot::new(UNRELATED_FRAME),
        FrameSnapshot::new(MERCHANT_FRAME),
    ]
}

fn height_payload(dashboard: &str, height: f64) -> String {
    format!(r#"{{"type":"dashboard-height","dashboard":"{dashboard}","height":{height}}}"#)
}

#[test]
fn non_height_messages_never_mutate() {
    let listener = HeightListener::default();
    let payloads = [
        r#"{"type":"dashboard-width","dashboard":"industry-outlook","height":450}"#.to_string(),
        r#"{"type":"","dashboard":"industry-outlook","height":450}"#.to_string(),
        r#"{"height":450}"#.to_string(),
        "react-devtools-bridge".to_string(),
        String::new(),
    ];
    for payload in payloads {
        let dispatch = listener.dispatch(&payload, "https://any", &page_frames());
        assert!(dispatch.mutations.is_empty(), "payload mutated frames: {payload}");
    }
}

#[test]
fn map_dashboard_stays_excluded() {
    let listener = HeightListener::default();
    let mut frames = page_frames();
    frames.push(FrameSnapshot::new("https://dash.example.com/map-dashboard.html"));

    for payload in [
        height_payload("map-dashboard", 600.0),
        height_payload("unknown-dashboard", 600.0),
    ] {
        let dispatch = listener.dispatch(&payload, "https://any", &frames);
        assert!(dispatch.mutations.is_empty());
        assert!(matches!(dispatch.log.outcome, HeightOutcome::Ignored(_)));
    }
}

#[test]
fn only_the_reporting_dashboards_frame_changes() {
    let listener = HeightListener::default();
    let dispatch = listener.dispatch(
        &height_payload("industry-outlook", 450.0),
        "https://any",
        &page_frames(),
    );
    assert_eq!(
        dispatch.mutations,
        vec![FrameMutation {
            frame_index: 0,
            height_px: 450.0
        }]
    );
}

#[test]
fn policy_decides_applied_height() {
    let exact = HeightListener::new(ListenerConfig {
        policy: HeightPolicy::Exact,
        origins: OriginPolicy::Any,
    });
    let padded = HeightListener::new(ListenerConfig {
        policy: HeightPolicy::Padded,
        origins: OriginPolicy::Any,
    });
    let payload = height_payload("industry-outlook", 450.0);

    assert_eq!(
        exact.dispatch(&payload, "https://any", &page_frames()).mutations[0].height_px,
        450.0
    );
    assert_eq!(
        padded.dispatch(&payload, "https://any", &page_frames()).mutations[0].height_px,
        470.0
    );
}

#[test]
fn repeated_reports_converge_to_the_same_state() {
    // Simulate the DOM: applying a dispatch rewrites the tracked heights.
    let listener = HeightListener::default();
    let frames = page_frames();
    let mut heights: Vec<Option<f64>> = vec![None; frames.len()];

    let payload = height_payload("merchant-dashboard", 512.0);
    for _ in 0..2 {
        let dispatch = listener.dispatch(&payload, "https://any", &frames);
        for mutation in &dispatch.mutations {
            heights[mutation.frame_index] = Some(mutation.height_px);
        }
    }
    assert_eq!(heights, vec![None, None, Some(512.0)]);
}

#[test]
fn mixed_case_frame_sources_match() {
    let listener = HeightListener::default();
    let frames = vec![FrameSnapshot::new(
        "https://dash.example.com/Industry_Outlook_Key_Challenge.html?utm=embed",
    )];
    let dispatch = listener.dispatch(
        &height_payload("industry-outlook", 450.0),
        "https://any",
        &frames,
    );
    assert_eq!(dispatch.log.outcome, HeightOutcome::Applied { frames: 1 });
}

#[test]
fn recognized_dashboard_without_frames_is_a_noop() {
    let listener = HeightListener::default();
    let frames = vec![FrameSnapshot::new(UNRELATED_FRAME)];
    let dispatch = listener.dispatch(
        &height_payload("industry-outlook", 450.0),
        "https://any",
        &frames,
    );
    assert!(dispatch.mutations.is_empty());
    assert_eq!(dispatch.log.outcome, HeightOutcome::NoMatchingFrame);
}

proptest! {
    // Arbitrary channel traffic must never mutate a frame or panic.
    #[test]
    fn junk_payloads_never_mutate(payload in ".{0,256}") {
        let listener = HeightListener::default();
        let dispatch = listener.dispatch(&payload, "https://any", &page_frames());
        if !dispatch.mutations.is_empty() {
            // Only a syntactically valid height report may mutate.
            prop_assert!(framefit_core::decode_message(&payload).is_ok());
        }
    }

    #[test]
    fn padded_is_exact_plus_fixed_margin(height in 0.0f64..50_000.0) {
        let payload = height_payload("merchant-dashboard", height);
        let exact = HeightListener::new(ListenerConfig {
            policy: HeightPolicy::Exact,
            origins: OriginPolicy::Any,
        });
        let padded = HeightListener::new(ListenerConfig {
            policy: HeightPolicy::Padded,
            origins: OriginPolicy::Any,
        });
        let frames = page_frames();
        let exact_px = exact.dispatch(&payload, "https://any", &frames).mutations[0].height_px;
        let padded_px = padded.dispatch(&payload, "https://any", &frames).mutations[0].height_px;
        prop_assert_eq!(padded_px, exact_px + framefit_core::PADDED_MARGIN_PX);
    }

    #[test]
    fn negative_or_weird_heights_never_apply(height in -50_000.0f64..-0.0001) {
        let listener = HeightListener::default();
        let payload = height_payload("industry-outlook", height);
        let dispatch = listener.dispatch(&payload, "https://any", &page_frames());
        prop_assert!(dispatch.mutations.is_empty());
    }
}
