// crates/artledger-cli/src/commands/mod.rs
//
// Command module declarations and the shared invocation context.

pub mod artist;
pub mod artwork;
pub mod authentication;
pub mod authenticator;
pub mod keys;

use std::path::PathBuf;
use std::sync::Arc;

use artledger_core::{Clock, ManualClock, Principal, RegistryError, UnixClock};
use artledger_registry::Registry;
use artledger_store::RocksStore;

use crate::output::OutputFormat;

/// Everything a subcommand needs, resolved from flags and config.
pub struct Context {
    pub data_dir: PathBuf,
    pub keys_dir: PathBuf,
    pub owner: Option<String>,
    pub caller: Option<String>,
    pub height: Option<u64>,
    pub format: OutputFormat,
}

impl Context {
    /// Open the registry in `data_dir`, gated by the configured owner.
    pub fn open_registry(&self) -> Result<Registry<RocksStore>, Box<dyn std::error::Error>> {
        let owner: Principal = self
            .owner
            .as_deref()
            .ok_or("No owner configured. Set `owner` in the config file or pass --owner.")?
            .parse()?;

        std::fs::create_dir_all(&self.data_dir)?;
        let store = RocksStore::open(&self.data_dir.to_string_lossy())?;

        let clock: Arc<dyn Clock> = match self.height {
            Some(height) => Arc::new(ManualClock::new(height)),
            None => Arc::new(UnixClock::new()),
        };

        let registry = Registry::new(Arc::new(store), owner, clock);

        // A pinned height below what is already recorded would be clamped
        // silently; refuse it instead.
        if let Some(height) = self.height {
            let last = registry.last_height()?;
            if height < last {
                return Err(RegistryError::InvalidInput(format!(
                    "--height {} is below the last recorded height {}",
                    height, last
                ))
                .into());
            }
        }

        tracing::debug!(owner = %owner, data_dir = %self.data_dir.display(), "Registry opened");
        Ok(registry)
    }

    /// The principal this invocation acts as: `--as`, else the key files.
    pub fn caller(&self) -> Result<Principal, Box<dyn std::error::Error>> {
        if let Some(hex) = &self.caller {
            return Ok(hex.parse()?);
        }
        keys::load_principal(&self.keys_dir)
    }
}

/// Parse a principal argument.
pub fn parse_principal(s: &str) -> Result<Principal, RegistryError> {
    s.parse()
}
