//! Exit codes (BSD sysexits.h compatible, plus the tool's own status 1)

/// `tag` on a package the package manager reports as not installed
pub const NOT_INSTALLED: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (malformed tag database)
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
