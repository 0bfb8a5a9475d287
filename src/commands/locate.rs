//! # locate 命令实现
//!
//! 显示签名程序路径及其是否存在。
//!
//! ## 依赖关系
//! - 使用 `cli/locate.rs` 定义的参数
//! - 使用 `signer/mod.rs`, `utils/output.rs`

use crate::cli::locate::LocateArgs;
use crate::error::{Result, SignError};
use crate::models::BatchReport;
use crate::signer;
use crate::utils::output;

/// 执行 locate 命令
pub fn execute(args: LocateArgs) -> Result<()> {
    let path = args.signtool.unwrap_or_else(signer::default_signer_path);

    if path.exists() {
        output::print_success(&format!("signtool found: {}", path.display()));
        Ok(())
    } else {
        Err(SignError::SignerNotFound {
            path: path.display().to_string(),
            partial: BatchReport::default(),
        })
    }
}
