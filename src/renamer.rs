use std::fs;
use std::path::Path;

use log::debug;

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::{Error, Result};
use crate::sequencer;
use crate::timestamp::{FsTimestamps, TimestampSource};
use crate::types::{ImageFile, RenameEntry};

// ディレクトリ内の画像を実効タイムスタンプ昇順に連番リネームする
//
// 対象外のファイル（拡張子が合わないもの・サブディレクトリ）には触れない。
// 戻り値はリネームに使った順序そのままの（旧名, 新名）一覧。
pub fn process(dir: &Path, label: &str) -> Result<Vec<RenameEntry>> {
    process_with(dir, label, &FsTimestamps)
}

pub fn process_with(
    dir: &Path,
    label: &str,
    timestamps: &impl TimestampSource,
) -> Result<Vec<RenameEntry>> {
    let mut files = list_image_files(dir, timestamps)?;
    if files.is_empty() {
        return Err(Error::NoEligibleFiles);
    }
    debug!("対象画像 {} 件: {}", files.len(), dir.display());

    // 安定ソート: 同時刻のファイルは列挙順を維持する
    files.sort_by_key(|file| file.effective_time);

    let sequence = sequencer::generate(files.len(), label);
    let mut renamed = Vec::with_capacity(files.len());

    for (file, base) in files.iter().zip(&sequence) {
        let new_name = format!("{}{}", base, file.extension);
        let new_path = dir.join(&new_name);

        // まだリネームしていない別ファイルを上書きしない
        if new_name != file.name && new_path.exists() {
            return Err(Error::NameCollision { name: new_name });
        }

        fs::rename(&file.path, &new_path)?;
        renamed.push(RenameEntry {
            original_name: file.name.clone(),
            new_name,
        });
    }

    Ok(renamed)
}

// 対象拡張子のファイルを列挙順のまま集める（サブディレクトリは対象外）
fn list_image_files(dir: &Path, timestamps: &impl TimestampSource) -> Result<Vec<ImageFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => continue,
        };
        if !SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            continue;
        }

        // 非UTF-8のファイル名は対象外
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let extension = format!(".{}", ext);
        let effective_time = timestamps.effective_timestamp(&path)?;

        files.push(ImageFile {
            path,
            name,
            extension,
            effective_time,
        });
    }

    Ok(files)
}
