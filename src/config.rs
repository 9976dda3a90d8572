use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Series表示の既定の最大行数
pub const DEFAULT_MAX_ROWS: usize = 10;

/// Series表示設定
///
/// TOMLから読み込むことができます。省略した項目は既定値になります。
///
/// ```toml
/// max_rows = 20
/// show_name = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 表示する最大行数（これを超えた分は `... (k more)` と要約）
    pub max_rows: usize,
    /// 名前の行を表示するかどうか
    pub show_name: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_rows: DEFAULT_MAX_ROWS,
            show_name: true,
        }
    }
}

impl DisplayConfig {
    /// TOML文字列から設定を読み込む
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DisplayConfig = toml::from_str(content)?;
        config.validate()?;
        log::debug!("display config loaded: max_rows={}, show_name={}", config.max_rows, config.show_name);
        Ok(config)
    }

    /// TOMLファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// TOML文字列へ書き出す
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.max_rows == 0 {
            return Err(Error::InvalidInput(
                "max_rowsは1以上である必要があります".to_string(),
            ));
        }
        Ok(())
    }
}
