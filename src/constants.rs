// アップロードサイズ上限（16MB、適用はWebレイヤー側）
pub const MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;

// サポートする拡張子
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

// ダウンロード時に提示するZIPファイル名
pub const ARCHIVE_DOWNLOAD_NAME: &str = "renamed_images.zip";

// バッチディレクトリ名のフォーマット（ミリ秒まで入れて同時リクエストの重複を避ける）
pub const BATCH_DIR_FORMAT: &str = "%Y%m%d_%H%M%S_%3f";
