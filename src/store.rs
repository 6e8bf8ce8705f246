use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ProfileConfig, ProfileState};

/// File-backed profile: `config.json` (API endpoint) and `state.json` (the
/// persisted bearer token) under a single profile directory.
#[derive(Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn default_root() -> Result<PathBuf> {
        if let Some(dir) = env::var_os("RLINE_HOME") {
            return Ok(PathBuf::from(dir));
        }
        let home = env::var_os("HOME")
            .ok_or_else(|| anyhow!("HOME is not set (set RLINE_HOME to pick a profile directory)"))?;
        Ok(PathBuf::from(home).join(".config").join("rline"))
    }

    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_root()?)
    }

    pub fn open(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("create profile dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ProfileConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ProfileConfig {
                version: 1,
                api: None,
            });
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ProfileConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ProfileConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    /// The persisted bearer token, stored under the `rline_token` key.
    pub fn read_token(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.rline_token)
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.rline_token = Some(token.to_string());
        self.write_state(&st)
    }

    pub fn clear_token(&self) -> Result<()> {
        let mut st = self.read_state()?;
        st.rline_token = None;
        self.write_state(&st)
    }

    fn read_state(&self) -> Result<ProfileState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(ProfileState {
                version: 1,
                rline_token: None,
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: ProfileState = serde_json::from_slice(&bytes).context("parse state.json")?;
        Ok(st)
    }

    fn write_state(&self, st: &ProfileState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store/profile_store_tests.rs"]
mod tests;
