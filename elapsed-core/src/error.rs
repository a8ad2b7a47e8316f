pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("duration overflow: {lhs}ns + {rhs}ns does not fit in 64 bits")]
    Overflow { lhs: i64, rhs: i64 },

    #[error("negative duration ({0}ns) cannot be converted to std::time::Duration")]
    Negative(i64),

    #[error("duration of {0}ns does not fit in 64 bits")]
    OutOfRange(u128),
}
