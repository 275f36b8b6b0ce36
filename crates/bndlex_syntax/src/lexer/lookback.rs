//! Bounded two-character lookback used for logical line-start detection.

/// The (at most) two bytes immediately before a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lookback {
    /// Byte at `pos - 2`, if any.
    second: Option<u8>,
    /// Byte at `pos - 1`, if any.
    first: Option<u8>,
}

impl Lookback {
    /// Capture the window before `pos`. Positions past the end of `bytes` see an empty window
    /// for the missing bytes, never a panic.
    pub(crate) fn before(bytes: &[u8], pos: usize) -> Self {
        let at = |back: usize| pos.checked_sub(back).and_then(|i| bytes.get(i)).copied();
        Self {
            second: at(2),
            first: at(1),
        }
    }

    /// `true` at buffer offset 0, or right after a line feed that is not escaped by a backslash.
    pub(crate) fn is_line_start(&self) -> bool {
        match (self.second, self.first) {
            (_, None) => true,
            (Some(b'\\'), Some(b'\n')) => false,
            (_, Some(b'\n')) => true,
            _ => false,
        }
    }
}
