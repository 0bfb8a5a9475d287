//! # 外部进程启动器
//!
//! 同步启动签名程序，捕获 stdout/stderr 与退出码。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `std::process::Command`

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Windows 下不弹出控制台窗口
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// 已结束进程的输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// 退出码（被信号终止时为 None）
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// 进程启动边界
pub trait Launcher {
    /// 签名程序是否存在
    fn exists(&self, program: &Path) -> bool {
        program.exists()
    }

    /// 启动进程并等待其结束
    fn launch(&self, program: &Path, args: &[OsString]) -> io::Result<ProcessOutput>;
}

/// 基于 `std::process::Command` 的启动器
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &Path, args: &[OsString]) -> io::Result<ProcessOutput> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        let output = command.output()?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
