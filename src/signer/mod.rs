//! # signtool 调用模块
//!
//! 构造 `signtool sign` 命令行并定位签名程序。
//!
//! ## 命令格式
//! ```text
//! signtool sign /f <cert> [/p <password>] /fd SHA256 /tr <tsa-url> /td SHA256 /v <target>
//! ```
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/job.rs` 的 `SigningJob`
//! - 子模块: launcher

pub mod launcher;

pub use launcher::{Launcher, ProcessOutput, SystemLauncher};

use crate::models::SigningJob;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 签名程序默认文件名
pub const SIGNTOOL_FILE_NAME: &str = "signtool.exe";

/// 时间戳服务器
pub const TIMESTAMP_URL: &str = "http://timestamp.digicert.com";

/// 文件摘要与时间戳摘要算法
pub const DIGEST_ALGORITHM: &str = "SHA256";

/// 构造单个目标文件的 signtool 参数列表（不含程序本身）
///
/// 未提供密码时整个 `/p` 参数对被省略，而不是传递空字符串。
pub fn build_sign_args(job: &SigningJob, target: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "sign".into(),
        "/f".into(),
        job.certificate.clone().into_os_string(),
    ];

    if let Some(password) = job.password() {
        args.push("/p".into());
        args.push(password.into());
    }

    args.extend([
        OsString::from("/fd"),
        DIGEST_ALGORITHM.into(),
        "/tr".into(),
        TIMESTAMP_URL.into(),
        "/td".into(),
        DIGEST_ALGORITHM.into(),
        "/v".into(),
        target.as_os_str().to_os_string(),
    ]);

    args
}

/// 生成用于日志的命令行，密码替换为 `****`
pub fn redacted_command_line(program: &Path, args: &[OsString]) -> String {
    let mut parts = vec![program.display().to_string()];
    let mut hide_next = false;

    for arg in args {
        let text = arg.to_string_lossy();
        if hide_next {
            parts.push("****".to_string());
            hide_next = false;
            continue;
        }
        hide_next = text == "/p";
        if text.contains(' ') {
            parts.push(format!("\"{}\"", text));
        } else {
            parts.push(text.to_string());
        }
    }

    parts.join(" ")
}

/// 默认签名程序位置
///
/// 优先查找与当前可执行文件同目录的 `signtool.exe`，
/// 找不到时回退到当前工作目录。
pub fn default_signer_path() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SIGNTOOL_FILE_NAME)));

    match beside_exe {
        Some(path) if path.exists() => path,
        _ => std::env::current_dir()
            .map(|dir| dir.join(SIGNTOOL_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from(SIGNTOOL_FILE_NAME)),
    }
}
