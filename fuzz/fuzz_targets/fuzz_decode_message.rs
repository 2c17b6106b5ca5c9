#![no_main]

use framefit_core::decode_message;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cross-document payloads are attacker-controlled.
    // The decoder must never panic regardless of input.
    if let Ok(payload) = core::str::from_utf8(data) {
        let _ = decode_message(payload);
    }
});
