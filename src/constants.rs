//! Constants used throughout the esmfix application

/// Default root directory, usually the `outDir` of the TypeScript compiler
pub const DEFAULT_ROOT_DIR: &str = "js";

/// Default extension appended to import specifiers, without the leading dot
pub const DEFAULT_EXTENSION: &str = "js";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
