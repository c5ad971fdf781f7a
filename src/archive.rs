use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

// ディレクトリ直下のファイルをメモリ上のZIPにまとめる
//
// エントリは「{ラベル}/{ファイル名}」に配置する。
pub fn build_archive(dir: &Path, label: &str) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // 出力を決定的にするため名前順で走査する
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => continue,
        };

        writer.start_file(format!("{}/{}", label, name), options)?;
        let bytes = fs::read(entry.path())?;
        writer.write_all(&bytes)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
