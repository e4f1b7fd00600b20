// Error taxonomy for the hash grammar.
//
// Decoding is all-or-nothing per feature: any structural violation aborts
// with a `FormatError` and no partial result.  A malformed feature inside a
// collection propagates to the caller, who decides whether to drop it and
// continue with the rest.

use thiserror::Error;

/// A structural violation of the feature-hash grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Input ended inside a number or token.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A byte outside the 64-symbol alphabet inside a number run.
    #[error("character {0:?} is not in the encoding alphabet")]
    BadCharacter(char),

    /// Accumulated number no longer fits in 64 bits.
    #[error("encoded number overflows 64 bits")]
    Overflow,

    /// A dx with no following dy.
    #[error("coordinate run ends between the two halves of a pair")]
    TruncatedCoordinatePair,

    /// First character is not one of the six geometry tags.
    #[error("unknown geometry tag {0:?}")]
    UnknownTag(char),

    /// No `(` immediately after the geometry tag.
    #[error("expected '(' after geometry tag")]
    MissingOpenParen,

    /// Feature or geometry text lacks its final `)`.
    #[error("missing closing ')'")]
    MissingCloseParen,

    /// A `key*value` token that does not split into exactly two parts.
    #[error("malformed token {0:?}: expected exactly one '*' separator")]
    MalformedToken(String),

    /// Percent-decoding produced a non-UTF-8 payload.
    #[error("invalid percent-encoded token {0:?}")]
    BadEscape(String),

    /// Collection text does not start with the literal `F`.
    #[error("feature collection must start with 'F'")]
    MissingCollectionPrefix,

    /// Structurally valid text with nonsensical content.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
