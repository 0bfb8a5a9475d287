//! # 批量签名执行器
//!
//! 按输入顺序逐个调用签名程序。
//!
//! ## 功能
//! - 严格串行：同一时刻最多一个外部进程
//! - 签名程序缺失（检查或启动时）终止整个批次
//! - 单个文件失败只记录，不中断批次
//! - 进度条显示与逐文件事件回调
//!
//! ## 依赖关系
//! - 被 `commands/sign.rs` 调用
//! - 使用 `signer/` 构造命令并启动进程
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::{Result, SignError};
use crate::models::{BatchReport, SigningJob, SigningResult};
use crate::signer::{self, Launcher, SystemLauncher};
use crate::utils::progress;

use indicatif::ProgressBar;
use std::io;
use std::path::Path;

/// 批次执行过程中的事件
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// 即将处理第 `index` 个文件（从 1 开始）
    Started {
        index: usize,
        total: usize,
        file: &'a Path,
    },
    /// 第 `index` 个文件处理完毕
    Finished {
        index: usize,
        total: usize,
        result: &'a SigningResult,
    },
}

/// 批量签名执行器
pub struct BatchRunner<L = SystemLauncher> {
    launcher: L,
    show_progress: bool,
}

impl BatchRunner<SystemLauncher> {
    /// 使用系统进程启动器
    pub fn new() -> Self {
        Self::with_launcher(SystemLauncher)
    }
}

impl Default for BatchRunner<SystemLauncher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Launcher> BatchRunner<L> {
    pub fn with_launcher(launcher: L) -> Self {
        Self {
            launcher,
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 执行批次
    pub fn run(&self, job: &SigningJob, signer_path: &Path) -> Result<BatchReport> {
        self.run_with(job, signer_path, |_| {})
    }

    /// 执行批次，并在每个文件开始和结束时回调 `on_event`
    pub fn run_with<F>(&self, job: &SigningJob, signer_path: &Path, mut on_event: F) -> Result<BatchReport>
    where
        F: FnMut(BatchEvent<'_>),
    {
        job.validate()?;

        let total = job.targets.len();
        let pb = if self.show_progress {
            progress::create_progress_bar(total as u64, "Signing")
        } else {
            ProgressBar::hidden()
        };

        log::info!(
            "Signing {} file(s) with certificate '{}' (batch mode: {})",
            total,
            job.certificate.display(),
            job.batch
        );

        let mut report = BatchReport::default();

        for (i, target) in job.targets.iter().enumerate() {
            let index = i + 1;

            if !self.launcher.exists(signer_path) {
                pb.finish_and_clear();
                log::info!("Signer missing at '{}', aborting batch", signer_path.display());
                return Err(SignError::SignerNotFound {
                    path: signer_path.display().to_string(),
                    partial: report,
                });
            }

            pb.set_message(file_label(target));
            pb.suspend(|| {
                on_event(BatchEvent::Started {
                    index,
                    total,
                    file: target,
                })
            });

            let result = match self.sign_one(job, signer_path, target) {
                Ok(result) => result,
                Err(e) => {
                    pb.finish_and_clear();
                    log::info!(
                        "Signer could not be started at '{}' ({}), aborting batch",
                        signer_path.display(),
                        e
                    );
                    return Err(SignError::SignerNotFound {
                        path: signer_path.display().to_string(),
                        partial: report,
                    });
                }
            };

            pb.suspend(|| {
                on_event(BatchEvent::Finished {
                    index,
                    total,
                    result: &result,
                })
            });
            pb.inc(1);

            report.push(result);
        }

        pb.finish_and_clear();

        log::info!(
            "Batch finished: {} succeeded, {} failed",
            report.success,
            report.failure
        );

        Ok(report)
    }

    /// 签名单个文件
    ///
    /// 启动时报告 `NotFound` 说明签名程序本身不可用，返回 `Err` 终止批次；
    /// 其余失败都转化为结果数据。
    fn sign_one(
        &self,
        job: &SigningJob,
        signer_path: &Path,
        target: &Path,
    ) -> io::Result<SigningResult> {
        let args = signer::build_sign_args(job, target);
        log::debug!("Running: {}", signer::redacted_command_line(signer_path, &args));

        match self.launcher.launch(signer_path, &args) {
            Ok(output) => {
                log::debug!(
                    "'{}' exited with {:?}",
                    target.display(),
                    output.exit_code
                );
                Ok(SigningResult::from_exit(
                    target,
                    output.exit_code,
                    output.stdout,
                    output.stderr,
                ))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
            Err(e) => {
                log::warn!("Failed to run signer for '{}': {}", target.display(), e);
                Ok(SigningResult::invocation_error(target, e.to_string()))
            }
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
