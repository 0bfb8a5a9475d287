//! # 统一错误处理模块
//!
//! 定义 macan-sign 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件签名失败不是错误：它作为数据记录在 `BatchReport` 中。
//! 只有输入校验失败和签名程序缺失会以 `Err` 形式返回。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `models/report.rs` 的 `BatchReport`

use crate::models::BatchReport;
use thiserror::Error;

/// macan-sign 统一错误类型
#[derive(Error, Debug)]
pub enum SignError {
    // ─────────────────────────────────────────────────────────────
    // 输入校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("No target files selected")]
    EmptyTargets,

    #[error("No certificate file selected")]
    EmptyCertificate,

    // ─────────────────────────────────────────────────────────────
    // 致命错误：终止整个批次
    // ─────────────────────────────────────────────────────────────
    #[error("'{path}' not found. Make sure signtool.exe is in the same directory as this application.")]
    SignerNotFound {
        path: String,
        /// 终止前已完成的结果
        partial: BatchReport,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 批次汇总
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} of {total} file(s) failed to sign")]
    BatchFailed { failed: usize, total: usize },
}

impl SignError {
    /// 是否为输入校验错误（未启动任何进程）
    pub fn is_validation(&self) -> bool {
        matches!(self, SignError::EmptyTargets | SignError::EmptyCertificate)
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SignError>;
