use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::warn;

use crate::archive;
use crate::config::BatchConfig;
use crate::constants::{ARCHIVE_DOWNLOAD_NAME, BATCH_DIR_FORMAT};
use crate::error::{Error, Result};
use crate::renamer;
use crate::types::{BatchOutcome, UploadFile};

// 1リクエスト分のバッチ処理
//
// アップロードされたファイル群を専用の一時ディレクトリに書き出して
// リネームとZIP化を行う。一時ディレクトリは成功・失敗にかかわらず削除する。
// ラベルはZIP内のフォルダ名になるため、パス区切りを含まない前提。
pub fn run_batch(
    config: &BatchConfig,
    uploads: &[UploadFile],
    label: &str,
) -> Result<BatchOutcome> {
    if uploads.is_empty() {
        return Err(Error::NoEligibleFiles);
    }

    fs::create_dir_all(&config.upload_root)?;
    let batch_dir = create_batch_dir(&config.upload_root)?;

    let result = stage_and_process(&batch_dir, uploads, label);

    // 成功・失敗どちらの経路でも一時ディレクトリを残さない
    if let Err(e) = fs::remove_dir_all(&batch_dir) {
        warn!(
            "一時ディレクトリの削除に失敗: {} - {}",
            batch_dir.display(),
            e
        );
    }

    result
}

fn stage_and_process(
    batch_dir: &Path,
    uploads: &[UploadFile],
    label: &str,
) -> Result<BatchOutcome> {
    for upload in uploads {
        let name = match sanitize_filename(&upload.name) {
            Some(name) => name,
            // サニタイズ後に名前が残らないアップロードは保存しない
            None => continue,
        };
        fs::write(batch_dir.join(&name), &upload.bytes)?;
    }

    let renamed = renamer::process(batch_dir, label)?;
    let archive = archive::build_archive(batch_dir, label)?;

    Ok(BatchOutcome {
        archive,
        download_name: ARCHIVE_DOWNLOAD_NAME.to_string(),
        renamed,
    })
}

// 時刻由来の名前で新しいバッチディレクトリを作る
//
// ミリ秒まで含めて同名になった場合は連番を付けて作り直すため、
// 同時に到着したリクエストが同じディレクトリを共有することはない。
fn create_batch_dir(root: &Path) -> Result<PathBuf> {
    let stamp = Local::now().format(BATCH_DIR_FORMAT).to_string();

    let mut candidate = root.join(&stamp);
    let mut suffix = 0u32;
    loop {
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                suffix += 1;
                candidate = root.join(format!("{}_{}", stamp, suffix));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

// パス区切りを取り除き、ファイル名部分だけを残す
fn sanitize_filename(name: &str) -> Option<String> {
    let name = name.replace('\\', "/");
    let base = name.rsplit('/').next().unwrap_or_default();
    let trimmed = base.trim().trim_start_matches('.');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
