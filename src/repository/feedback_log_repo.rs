// ==========================================
// 户型评分系统 - 反馈日志仓储
// ==========================================
// 格式: JSON Lines，每行一条完整 FeedbackRecord
// 红线: 只追加不修改；写入串行化（单写者），不产生交错的半行
// 容错: 仅允许文件末尾存在未以换行结束的残行（崩溃遗留），读取时丢弃
// ==========================================

use crate::domain::FeedbackRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

// ==========================================
// FeedbackLogRepository - 反馈日志仓储
// ==========================================
// 红线: Repository 不做业务逻辑,只做数据映射
pub struct FeedbackLogRepository {
    path: PathBuf,
    writer: Mutex<()>,
}

impl FeedbackLogRepository {
    /// 打开日志（不存在时在首次追加时创建）
    ///
    /// 会创建父目录，并截掉上一次崩溃留下的末尾残行，
    /// 保证后续追加不会拼接到半行之后。
    pub fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let repo = Self {
            path,
            writer: Mutex::new(()),
        };
        repo.repair_tail()?;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, ()>> {
        self.writer
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // 写入操作
    // ==========================================

    /// 追加一条记录
    ///
    /// 整行（含换行符）在持锁期间一次 write_all 写出。
    pub fn append(&self, record: &FeedbackRecord) -> RepositoryResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.lock()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// 截掉末尾未完成的行
    ///
    /// # 返回
    /// - `Ok(true)`: 发现并截掉了残行
    /// - `Ok(false)`: 文件不存在或已完整
    pub fn repair_tail(&self) -> RepositoryResult<bool> {
        let _guard = self.lock()?;
        if !self.path.exists() {
            return Ok(false);
        }

        let bytes = fs::read(&self.path)?;
        if bytes.is_empty() || bytes.ends_with(b"\n") {
            return Ok(false);
        }

        let keep = bytes
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |pos| pos + 1);
        warn!(
            "反馈日志末尾存在残行，已截断: path={}, dropped_bytes={}",
            self.path.display(),
            bytes.len() - keep
        );

        let file = OpenOptions::new().write(true).open(&self.path)?;
        file.set_len(keep as u64)?;
        Ok(true)
    }

    // ==========================================
    // 读取操作
    // ==========================================

    /// 按写入顺序读取全部完整记录
    ///
    /// 末尾未以换行结束的残行被丢弃；中间出现无法解析的完整行视为损坏。
    pub fn read_all(&self) -> RepositoryResult<Vec<FeedbackRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = {
            let _guard = self.lock()?;
            fs::read(&self.path)?
        };

        let mut segments: Vec<&[u8]> = bytes.split(|&b| b == b'\n').collect();
        // split 的最后一段是最后一个换行之后的内容: 完整文件为空段，否则为残行
        if let Some(tail) = segments.pop() {
            if !tail.is_empty() {
                warn!(
                    "读取反馈日志时丢弃末尾残行: path={}, bytes={}",
                    self.path.display(),
                    tail.len()
                );
            }
        }

        let mut records = Vec::with_capacity(segments.len());
        for (idx, segment) in segments.into_iter().enumerate() {
            let line = idx + 1;
            let text = std::str::from_utf8(segment).map_err(|e| RepositoryError::CorruptRecord {
                line,
                message: e.to_string(),
            })?;
            if text.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(text).map_err(|e| RepositoryError::CorruptRecord {
                line,
                message: e.to_string(),
            })?;
            records.push(record);
        }

        Ok(records)
    }
}
