use anyhow::{Context, Result};

use crate::config::Config;

/// Bearer token for the authenticated session, persisted as a plain file
/// under the config base dir. Injected into the HTTP store explicitly; there
/// is no ambient auth state anywhere in the client.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
}

impl Session {
    /// Load the stored session, if any. An unreadable or empty token file is
    /// treated as "not logged in".
    pub fn load(config: &Config) -> Option<Self> {
        let token = std::fs::read_to_string(config.token_path()).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    pub fn save(config: &Config, token: &str) -> Result<Self> {
        config.ensure_dirs()?;
        let path = config.token_path();
        std::fs::write(&path, token)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(Self {
            token: token.to_string(),
        })
    }

    pub fn clear(config: &Config) -> Result<()> {
        let path = config.token_path();
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}
