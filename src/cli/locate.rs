//! # locate 子命令 CLI 定义
//!
//! 显示将被使用的 signtool.exe 路径
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/locate.rs`

use clap::Args;
use std::path::PathBuf;

/// locate 子命令参数
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Path to signtool.exe to check instead of the default location
    #[arg(long, env = "MACAN_SIGNTOOL")]
    pub signtool: Option<PathBuf>,
}
