#![no_main]

use framefit_core::{FrameSnapshot, HeightListener, decode_message};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = core::str::from_utf8(data) else {
        return;
    };

    let listener = HeightListener::default();
    let frames = [
        FrameSnapshot::new("https://dash.example.com/industry_outlook_key_challenge.html"),
        FrameSnapshot::new("https://dash.example.com/merchant-dashboard"),
        FrameSnapshot::new("https://cdn.example.com/unrelated"),
    ];
    let dispatch = listener.dispatch(payload, "https://any", &frames);

    // Only a syntactically valid height report may ever mutate a frame,
    // and mutations must stay inside the snapshot.
    if !dispatch.mutations.is_empty() {
        assert!(decode_message(payload).is_ok());
        for mutation in &dispatch.mutations {
            assert!(mutation.frame_index < frames.len());
            assert!(mutation.height_px.is_finite() && mutation.height_px >= 0.0);
        }
    }
});
