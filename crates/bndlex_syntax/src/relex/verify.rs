//! Whole-buffer check of the resumption contract.

use thiserror::Error;

use crate::lexer::{LexState, Token, TokenKind, lex_range, lex_with_states};

/// Summary of a successful [`verify_resumption`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResumeReport {
    pub tokens: usize,
    pub boundaries_checked: usize,
    /// Boundaries right after a comment; the two-valued state cannot reproduce the `SECTION_END` there.
    pub boundaries_skipped: usize,
}

/// First divergence between a resumed scan and the original stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("resuming at offset {offset} with state {state} diverged at token {index}: expected {expected:?}, got {actual:?}")]
pub struct ResumeMismatch {
    pub offset: usize,
    pub state: i32,
    /// Index into the original stream.
    pub index: usize,
    pub expected: Option<Token>,
    pub actual: Option<Token>,
}

/// Restart a fresh scan at every token boundary of `source` and compare it with the full scan.
///
/// Quadratic in the token count; meant for tests and the `verify` command, not for editor hot paths.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn verify_resumption(source: &str) -> Result<ResumeReport, ResumeMismatch> {
    let full = lex_with_states(source, 0, source.len(), LexState::Initial);
    let mut report = ResumeReport {
        tokens: full.len(),
        ..ResumeReport::default()
    };

    for (i, (token, state)) in full.iter().enumerate() {
        if i > 0 && full[i - 1].0.kind == TokenKind::Comment {
            report.boundaries_skipped += 1;
            continue;
        }

        let offset = token.span.start;
        let resumed = lex_range(source, offset, source.len(), state.as_raw());

        let len = resumed.len().max(full.len() - i);
        for k in 0..len {
            let want = full.get(i + k).map(|(t, _)| *t);
            let got = resumed.get(k).copied();
            if want != got {
                return Err(ResumeMismatch {
                    offset,
                    state: state.as_raw(),
                    index: i + k,
                    expected: want,
                    actual: got,
                });
            }
        }
        report.boundaries_checked += 1;
    }

    tracing::debug!(
        checked = report.boundaries_checked,
        skipped = report.boundaries_skipped,
        "resumption verified"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_resumes_everywhere() {
        let source = "Bundle-Name: demo\nImport-Package: a;version=\"[1,2)\",\\\n b\n\n# note\nX: y\n";
        let report = verify_resumption(source).unwrap();
        assert_eq!(report.boundaries_checked + report.boundaries_skipped, report.tokens);
        assert_eq!(report.boundaries_skipped, 1);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(verify_resumption("").unwrap(), ResumeReport::default());
    }

    #[test]
    fn test_mismatch_message() {
        let err = ResumeMismatch {
            offset: 2,
            state: 0,
            index: 1,
            expected: None,
            actual: None,
        };
        assert!(err.to_string().starts_with("resuming at offset 2 with state 0"));
    }
}
