use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

// 実効タイムスタンプの取得元
//
// テストでは決定的なソースに差し替えられるよう trait にしている。
pub trait TimestampSource {
    fn effective_timestamp(&self, path: &Path) -> io::Result<SystemTime>;
}

// ファイルシステムのメタデータから取得する標準実装
pub struct FsTimestamps;

impl TimestampSource for FsTimestamps {
    fn effective_timestamp(&self, path: &Path) -> io::Result<SystemTime> {
        let metadata = fs::metadata(path)?;

        // 作成日時を取得できないプラットフォーム／ファイルシステムでは
        // 更新日時に黙って切り替える
        match metadata.created() {
            Ok(time) => Ok(time),
            Err(_) => metadata.modified(),
        }
    }
}
