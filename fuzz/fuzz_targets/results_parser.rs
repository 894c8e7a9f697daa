#![no_main]

use evaluar::loader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy conversion)
    if let Ok(input) = std::str::from_utf8(data) {
        // Attempt to parse the results file text
        // This should not panic regardless of input
        let _ = loader::parse_results_text(input);
    }
});
