use thiserror::Error;

// クレート共通エラー
#[derive(Debug, Error)]
pub enum Error {
    // 対象拡張子のファイルが1件もない
    #[error("対象となる画像ファイルがありません")]
    NoEligibleFiles,

    // リネーム先に別のファイルが既に存在する
    #[error("リネーム先のファイル名が既に存在します: {name}")]
    NameCollision { name: String },

    #[error("ファイル操作エラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP生成エラー: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("設定ファイルの解析エラー: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
