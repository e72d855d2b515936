//! Configuration command handler.
//!
//! Prints every setting together with the layer it came from
//! (default, file, env or cli).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "data_dir": {
//!     "value": ".",
//!     "source": "default"
//!   },
//!   "starting_balance": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "data_dir": {
            "value": config.data_dir,
            "source": sources.data_dir,
        },
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
