use crate::types::RenameEntry;

// アップロードされたファイル（元ファイル名と内容）
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

// バッチ処理の結果
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    // ZIPアーカイブ本体
    pub archive: Vec<u8>,
    // ダウンロード時に提示するファイル名
    pub download_name: String,
    // タイムスタンプ昇順のリネーム一覧
    pub renamed: Vec<RenameEntry>,
}
