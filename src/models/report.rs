//! # 签名结果数据模型
//!
//! 单个文件的签名结果与整个批次的汇总报告。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 产生
//! - 被 `batch/export.rs`, `commands/sign.rs` 使用

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 签名结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::Failure => write!(f, "failure"),
        }
    }
}

/// 单个文件的签名结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningResult {
    /// 目标文件
    pub file: PathBuf,

    /// 进程退出码（未启动或被信号终止时为 None）
    pub exit_code: Option<i32>,

    /// 捕获的标准输出
    pub stdout: String,

    /// 捕获的标准错误
    pub stderr: String,

    /// 启动失败时的错误信息
    pub error: Option<String>,

    pub outcome: Outcome,
}

impl SigningResult {
    /// 根据退出码分类：仅 0 为成功
    pub fn from_exit(file: &Path, exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        let outcome = match exit_code {
            Some(0) => Outcome::Success,
            _ => Outcome::Failure,
        };
        SigningResult {
            file: file.to_path_buf(),
            exit_code,
            stdout,
            stderr,
            error: None,
            outcome,
        }
    }

    /// 进程未能启动或等待失败
    pub fn invocation_error(file: &Path, error: impl Into<String>) -> Self {
        SigningResult {
            file: file.to_path_buf(),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            error: Some(error.into()),
            outcome: Outcome::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// 用于显示的文件名
    pub fn file_name(&self) -> String {
        self.file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

/// 批次汇总报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub success: usize,
    pub failure: usize,
    /// 按输入顺序排列
    pub results: Vec<SigningResult>,
}

impl BatchReport {
    /// 追加结果并更新计数
    pub fn push(&mut self, result: SigningResult) {
        match result.outcome {
            Outcome::Success => self.success += 1,
            Outcome::Failure => self.failure += 1,
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failure
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failure == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_classification() {
        let file = Path::new("a.exe");
        assert!(SigningResult::from_exit(file, Some(0), String::new(), String::new()).is_success());
        assert!(!SigningResult::from_exit(file, Some(1), String::new(), String::new()).is_success());
        assert!(!SigningResult::from_exit(file, Some(-1), String::new(), String::new()).is_success());
        assert!(!SigningResult::from_exit(file, None, String::new(), String::new()).is_success());
    }

    #[test]
    fn test_report_counts() {
        let mut report = BatchReport::default();
        report.push(SigningResult::from_exit(Path::new("a.exe"), Some(0), String::new(), String::new()));
        report.push(SigningResult::invocation_error(Path::new("b.exe"), "boom"));
        report.push(SigningResult::from_exit(Path::new("c.exe"), Some(2), String::new(), String::new()));

        assert_eq!(report.success, 1);
        assert_eq!(report.failure, 2);
        assert_eq!(report.total(), 3);
        assert!(!report.all_succeeded());
        assert_eq!(report.results[1].file_name(), "b.exe");
        assert_eq!(report.results[1].error.as_deref(), Some("boom"));
    }
}
