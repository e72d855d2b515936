//! Exit code constants for the CLI application.

/// Success exit code, also used when the player picks Exit.
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Standard input closed while the game was waiting for the player.
pub const INTERRUPTED: i32 = 130;
