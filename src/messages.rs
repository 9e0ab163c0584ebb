// Fixed texts shared by both logging stacks

pub const TRACE: &str = "Trace Level";
pub const DEBUG: &str = "Debug Level";
pub const INFO: &str = "Info Level";
pub const WARN: &str = "Warn Level";
pub const ERROR: &str = "Error Level";

/// Acknowledgement body returned by every logging endpoint
pub const ACK: &str = "ok";
