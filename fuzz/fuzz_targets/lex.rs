#![no_main]

use bndlex::lexer;
use bndlex::relex::verify_resumption;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Tokens must tile the whole buffer
        let mut pos = 0;
        for token in lexer::lex(s) {
            assert_eq!(token.span.start, pos);
            assert!(token.span.end > pos);
            pos = token.span.end;
        }
        assert_eq!(pos, s.len());

        if let Err(mismatch) = verify_resumption(s) {
            panic!("{mismatch}");
        }
    }
});
