//! # sign 子命令 CLI 定义
//!
//! 调用 signtool 对目标文件签名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sign.rs`

use crate::batch::collector::DEFAULT_PATTERN;

use clap::Args;
use std::path::PathBuf;

/// sign 子命令参数
#[derive(Args, Debug)]
pub struct SignArgs {
    /// File(s) to sign (.exe/.dll); directories are expanded in batch mode
    #[arg(required = true)]
    pub targets: Vec<PathBuf>,

    /// Path to certificate file (.pfx)
    #[arg(long, env = "MACAN_SIGN_CERT")]
    pub cert: PathBuf,

    /// Certificate password (leave unset if none)
    #[arg(long, env = "MACAN_SIGN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Sign multiple files at once (Batch Mode)
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    // ─────────────────────────────────────────────────────────────
    // Batch mode options
    // ─────────────────────────────────────────────────────────────
    /// File patterns used when expanding directories (comma-separated)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Search directories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Path to signtool.exe (defaults to the one next to this program)
    #[arg(long, env = "MACAN_SIGNTOOL")]
    pub signtool: Option<PathBuf>,

    /// Write a CSV report of every file's result ('-' for stdout)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Don't echo signtool output for each file
    #[arg(long, default_value_t = false)]
    pub no_output: bool,
}
