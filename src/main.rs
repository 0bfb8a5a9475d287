//! # macan-sign - signtool 批量签名前端
//!
//! 收集目标文件、证书与密码，逐个调用外部 `signtool.exe` 完成 Authenticode 签名，
//! 并汇总每个文件的输出与结果。签名本身完全由 signtool 完成。
//!
//! ## 子命令
//! - `sign`   - 签名单个文件，或以 `--batch` 批量签名
//! - `locate` - 显示签名程序位置
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集、串行执行、报告导出)
//!   │     ├── signer/    (signtool 命令构造与进程启动)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod signer;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.quiet, cli.verbose);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        if e.is_validation() {
            utils::output::print_warning(
                "Please select target file(s) and a certificate file first.",
            );
        }
        std::process::exit(1);
    }
}
