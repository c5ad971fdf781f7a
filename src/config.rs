use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CONTENT_LENGTH;
use crate::error::Result;

// アップロード処理の設定
//
// プロセス全体のグローバル設定ではなく、呼び出し側が明示的に保持して渡す。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    // バッチディレクトリを作る親ディレクトリ
    pub upload_root: PathBuf,
    // リクエストサイズ上限（適用はWebレイヤーの責務）
    #[serde(default = "default_max_content_length")]
    pub max_content_length: u64,
}

fn default_max_content_length() -> u64 {
    MAX_CONTENT_LENGTH
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            upload_root: PathBuf::from("uploads"),
            max_content_length: MAX_CONTENT_LENGTH,
        }
    }
}

impl BatchConfig {
    // JSONファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
