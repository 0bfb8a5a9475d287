//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `signer/`, `models/`, `utils/`
//! - 子模块: sign, locate

pub mod locate;
pub mod sign;

use crate::cli::{Cli, Commands};
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sign(args) => sign::execute(args, cli.quiet),
        Commands::Locate(args) => locate::execute(args),
    }
}
