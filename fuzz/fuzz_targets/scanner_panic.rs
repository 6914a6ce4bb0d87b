#![no_main]
use katexify_scan::ir::Segment;
use katexify_scan::{MarkerRenderer, render_to_string, scan};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Lossy conversion keeps multi-byte sequences next to markers in play.
    let s = String::from_utf8_lossy(data);

    let mut last_end = 0;
    for segment in scan(&s) {
        let span = segment.span();
        assert!(last_end <= span.start && span.end <= s.len());
        if let Segment::Math { body, .. } = segment {
            assert_eq!(body, &s[span.start..span.end]);
        }
        last_end = span.end;
    }

    let _ = render_to_string(&s, MarkerRenderer);
});
