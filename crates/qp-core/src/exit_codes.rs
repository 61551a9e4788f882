//! Exit codes for the qp-core CLI.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User/input errors (recoverable by fixing the input)
//! - 20-29: System errors

/// Exit codes for qp-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    // ========================================================================
    // User / Input Errors (10-19)
    // ========================================================================
    /// Invalid arguments or configuration
    ArgsError = 10,

    /// A required export file or folder is missing
    MissingInput = 11,

    /// An export file is malformed or has an unexpected shape
    InvalidInput = 12,

    // ========================================================================
    // System Errors (20-29)
    // ========================================================================
    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Check if this exit code is a user/input error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Get the code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::MissingInput => "ERR_MISSING_INPUT",
            ExitCode::InvalidInput => "ERR_INVALID_INPUT",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_consistent() {
        assert!(ExitCode::Clean.is_success());
        assert!(ExitCode::MissingInput.is_user_error());
        assert!(ExitCode::InvalidInput.is_user_error());
        assert!(!ExitCode::IoError.is_user_error());
        assert_eq!(i32::from(ExitCode::IoError), 21);
    }

    #[test]
    fn display_includes_name_and_code() {
        assert_eq!(ExitCode::MissingInput.to_string(), "ERR_MISSING_INPUT (11)");
    }
}
