use crate::error::{ChiliAiError, Result};
use chili_ai_common::{resolve_api_url, API_URL_ENV};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定は警告を出して既定値にする
    ///
    /// 壊れた config.json があっても `config --set-api-url` で上書きできるように。
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                log::warn!("{}; memakai konfigurasi bawaan", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("Gagal memuat {}: {}; memakai konfigurasi bawaan", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 設定と履歴を置くディレクトリ
    pub fn app_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ChiliAiError::Config("Direktori home tidak ditemukan".into()))?;
        Ok(home.join(".config").join("chili-ai"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.json"))
    }

    /// エンドポイントを決定
    ///
    /// 優先順位: `--api-url` > 環境変数 `CHILI_API_URL` > 設定ファイル > 既定値
    pub fn api_url(&self, cli_override: Option<&str>) -> String {
        let env_value = std::env::var(API_URL_ENV).ok();
        self.api_url_with(cli_override, env_value.as_deref())
    }

    pub fn api_url_with(&self, cli_override: Option<&str>, env_value: Option<&str>) -> String {
        let non_blank = |v: &&str| !v.trim().is_empty();
        let chosen = cli_override
            .filter(non_blank)
            .or_else(|| env_value.filter(non_blank))
            .or_else(|| self.api_url.as_deref().filter(non_blank));
        resolve_api_url(chosen)
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = Some(url);
        self.save()
    }
}
