#![no_main]

use libfuzzer_sys::fuzz_target;
use showcase::detector::{KeyEvent, SequenceDetector};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut detector = SequenceDetector::new("unbound").unwrap();
        for event in KeyEvent::typed(s) {
            detector.feed(&event);
            assert!(detector.buffer().chars().count() <= detector.window_len());
        }
    }
});
