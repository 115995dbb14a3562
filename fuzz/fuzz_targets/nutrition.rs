#![no_main]

use libfuzzer_sys::fuzz_target;

use menu_nutrition::nutrition::{numeric::extract_number, scrape_document};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    // Extraction must never panic, and whatever survives keeps its invariants
    for record in scrape_document(&html, "berkshire") {
        assert!(record.has_substantive_data());
        assert!(record.name.chars().count() >= 2);
    }

    if let Some(value) = extract_number(&html) {
        assert!(value >= 0.0);
    }
});
