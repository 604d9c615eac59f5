#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic — errors are fine, panics are bugs.
    if let Ok(draft) = serde_json::from_slice::<facturier::store::RecordDraft>(data) {
        let _ = draft.validate_create();
        let _ = draft.validate_update();
    }
});
