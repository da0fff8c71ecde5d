use crate::grammar::Grammar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Code,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
}

impl Mode {
    fn closing_quote(self) -> Option<u8> {
        match self {
            Mode::StringLiteral => Some(b'"'),
            Mode::CharLiteral => Some(b'\''),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanAction {
    /// Copy the current byte to the output and advance by one.
    Keep,
    /// Advance by the given number of bytes without emitting anything.
    Drop(usize),
}

/// State carried across one pass of the scanner.
///
/// `pending_escape` is only ever set inside a string or char literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub mode: Mode,
    pub pending_escape: bool,
    pub comment_seen: bool,
}

/// Decides what to do with the bytes at the front of `rest`.
///
/// `rest` must be non-empty. Every `Drop` advances by at least one byte.
pub(crate) fn transition(
    from: ScanState,
    rest: &[u8],
    grammar: &Grammar,
) -> (ScanState, ScanAction) {
    let current = rest[0];
    match from.mode {
        Mode::Code => {
            if let Some(len) = grammar.block_start_at(rest) {
                let next = ScanState {
                    mode: Mode::BlockComment,
                    comment_seen: true,
                    ..from
                };
                return (next, ScanAction::Drop(len));
            }
            if let Some(len) = grammar.single_line_at(rest) {
                let next = ScanState {
                    mode: Mode::LineComment,
                    comment_seen: true,
                    ..from
                };
                return (next, ScanAction::Drop(len));
            }
            let mode = match current {
                b'"' => Mode::StringLiteral,
                b'\'' => Mode::CharLiteral,
                _ => Mode::Code,
            };
            (ScanState { mode, ..from }, ScanAction::Keep)
        }
        Mode::LineComment => match rest.iter().position(|&b| b == b'\n') {
            Some(0) => (
                ScanState {
                    mode: Mode::Code,
                    ..from
                },
                ScanAction::Keep,
            ),
            Some(newline) => (from, ScanAction::Drop(newline)),
            None => (from, ScanAction::Drop(rest.len())),
        },
        Mode::BlockComment => match grammar.block_end_at(rest) {
            Some(len) => (
                ScanState {
                    mode: Mode::Code,
                    ..from
                },
                ScanAction::Drop(len),
            ),
            None => (from, ScanAction::Drop(1)),
        },
        Mode::StringLiteral | Mode::CharLiteral => {
            let next = if from.pending_escape {
                ScanState {
                    pending_escape: false,
                    ..from
                }
            } else if current == b'\\' {
                ScanState {
                    pending_escape: true,
                    ..from
                }
            } else if Some(current) == from.mode.closing_quote() {
                ScanState {
                    mode: Mode::Code,
                    ..from
                }
            } else {
                from
            };
            (next, ScanAction::Keep)
        }
    }
}
