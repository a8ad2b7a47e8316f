#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// Invalid CLI input (bad flags, non-numeric amounts, unknown units).
    InvalidInput = 30,

    /// Failure while computing or writing results (overflow, broken stdout).
    RuntimeError = 40,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
