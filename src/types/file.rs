use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

// 走査で拾った画像ファイル情報
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub name: String,
    // 先頭のドットを含む拡張子（大文字小文字は元のまま）
    pub extension: String,
    // 作成日時（取得できない環境では更新日時）
    pub effective_time: SystemTime,
}

// リネーム結果（旧名→新名）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameEntry {
    pub original_name: String,
    pub new_name: String,
}
