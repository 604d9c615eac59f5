#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|n: u64| {
    // Must not panic for any input, including the digit fallback range.
    let _ = facturier::core::french_words(n);
});
