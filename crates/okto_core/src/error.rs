use thiserror::Error;

/// Fatal interpreter failures.
///
/// Every variant indicates a malformed program or ROM image; the machine
/// state after one of these is unspecified and execution must stop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("call stack overflow: CALL at depth {depth}")]
    StackOverflow { depth: usize },

    #[error("call stack underflow: RET with no stored return address")]
    StackUnderflow,

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },
}
