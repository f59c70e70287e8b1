use thiserror::Error;

/// Every rejection the core can signal. All of them are local: the
/// network is left untouched and the caller may re-prompt or skip.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("no station named `{0}`")]
    StationNotFound(String),
    #[error("source and destination are both `{0}`")]
    SameStation(String),
    #[error("stations sit on different lines (`{from_line}` vs `{to_line}`)")]
    CrossLine { from_line: String, to_line: String },
    #[error("no segment between `{0}` and `{1}`")]
    SegmentNotFound(String, String),
    #[error("segment between `{0}` and `{1}` is already in place")]
    UndoAlreadyApplied(String, String),
}
