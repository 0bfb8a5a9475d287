//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `sign`: 调用 signtool 签名一个或多个文件
//! - `locate`: 显示签名程序位置
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: sign, locate

pub mod locate;
pub mod sign;

use clap::{Parser, Subcommand};

/// macan-sign - signtool 批量签名前端
#[derive(Parser, Debug)]
#[command(name = "macan-sign")]
#[command(version)]
#[command(about = "Sign Windows executables with signtool.exe, one file or a whole batch", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Don't output anything except errors
    #[arg(global = true, short, long, default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign one file, or many files with --batch
    Sign(sign::SignArgs),

    /// Show which signtool.exe would be used
    Locate(locate::LocateArgs),
}
