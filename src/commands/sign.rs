//! # sign 命令实现
//!
//! 收集目标文件，逐个调用 signtool 签名，并汇总结果。
//!
//! ## 功能
//! - 单文件模式与批量模式（目录展开）
//! - 逐文件显示 signtool 输出
//! - 结果表格与可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/sign.rs` 定义的参数
//! - 使用 `batch/`, `signer/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{export, BatchEvent, BatchRunner, FileCollector};
use crate::cli::sign::SignArgs;
use crate::error::{Result, SignError};
use crate::models::{BatchReport, SigningJob, SigningResult};
use crate::signer::{self, Launcher, SystemLauncher};
use crate::utils::output;

use colored::Colorize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Exit Code")]
    exit_code: String,
}

/// 执行 sign 命令
pub fn execute(args: SignArgs, quiet: bool) -> Result<()> {
    execute_with(args, quiet, SystemLauncher)
}

/// 使用指定的进程启动器执行 sign 命令
fn execute_with<L: Launcher>(args: SignArgs, quiet: bool, launcher: L) -> Result<()> {
    let quiet = presentation_quiet(&args, quiet);

    if !quiet {
        output::print_header("Macan Sign Tool");
    }

    if !args.batch && args.targets.len() > 1 {
        return Err(SignError::InvalidArgument(format!(
            "{} files given; use --batch to sign multiple files at once",
            args.targets.len()
        )));
    }

    let targets = FileCollector::new(args.targets)
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .expand_dirs(args.batch)
        .collect()?;

    let signer_path = args.signtool.unwrap_or_else(signer::default_signer_path);
    let job = SigningJob::new(targets, args.cert)
        .with_password(args.password)
        .with_batch(args.batch);

    if !quiet {
        output::print_info(&format!("Using signtool: {}", signer_path.display()));
        output::print_info(&format!(
            "{} file(s) selected{}",
            job.targets.len(),
            if job.has_password() { ", password supplied" } else { "" }
        ));
        output::print_info("Starting signing process...");
    }

    let echo = !quiet && !args.no_output;
    let runner = BatchRunner::with_launcher(launcher).show_progress(!quiet);

    let outcome = if quiet {
        runner.run(&job, &signer_path)
    } else {
        runner.run_with(&job, &signer_path, |event| print_event(event, echo))
    };

    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            if let SignError::SignerNotFound { partial, .. } = &e {
                finish_partial(partial, args.report.as_deref(), quiet);
            }
            return Err(e);
        }
    };

    if let Some(path) = &args.report {
        write_report(&report, path)?;
        if !quiet && !is_stdout(path) {
            output::print_info(&format!("Report written to '{}'", path.display()));
        }
    }

    if !quiet {
        print_summary(&report);
    }

    if report.all_succeeded() {
        Ok(())
    } else {
        Err(SignError::BatchFailed {
            failed: report.failure,
            total: report.total(),
        })
    }
}

/// 报告写到标准输出时，其余展示输出全部关闭，保证 CSV 可以直接管道处理
fn presentation_quiet(args: &SignArgs, quiet: bool) -> bool {
    quiet || args.report.as_deref().map_or(false, is_stdout)
}

/// 批次被终止时，仍然输出已完成部分
///
/// 报告写入失败只打印警告，调用方继续返回原来的致命错误。
fn finish_partial(partial: &BatchReport, report_path: Option<&Path>, quiet: bool) {
    if partial.is_empty() {
        return;
    }
    if let Some(path) = report_path {
        if let Err(e) = write_report(partial, path) {
            output::print_warning(&format!("Could not write partial report: {}", e));
        }
    }
    if !quiet {
        output::print_warning(&format!(
            "Batch aborted after {} file(s)",
            partial.total()
        ));
        println!("{}", Table::new(result_rows(partial)));
    }
}

/// 写出 CSV 报告，`-` 表示标准输出
fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    if is_stdout(path) {
        print!("{}", export::to_csv_string(report)?);
        Ok(())
    } else {
        export::to_csv(report, path)
    }
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// 打印单个文件的进度与 signtool 输出
fn print_event(event: BatchEvent<'_>, echo: bool) {
    match event {
        BatchEvent::Started { index, total, file } => {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            println!();
            println!("{}", "=".repeat(50).dimmed());
            println!("({}/{}) Processing file: {}", index, total, name.bold());
            println!("{}", "=".repeat(50).dimmed());
        }
        BatchEvent::Finished {
            index,
            total,
            result,
        } => {
            if echo {
                output::print_captured("OUTPUT", &result.stdout, false);
                output::print_captured("ERROR", &result.stderr, true);
            }
            print_outcome(result);
            log::trace!("{}/{} done", index, total);
        }
    }
}

fn print_outcome(result: &SigningResult) {
    let name = result.file_name();

    if let Some(err) = &result.error {
        output::print_error(&format!(
            "An unexpected error occurred with file {}: {}",
            name, err
        ));
    } else if result.is_success() {
        output::print_success(&format!("SUCCESSFULLY signed: {}", name));
    } else {
        output::print_error(&format!(
            "FAILED to sign: {} (Error Code: {})",
            name,
            exit_code_text(result.exit_code)
        ));
    }
}

fn print_summary(report: &BatchReport) {
    println!();
    output::print_separator();
    output::print_done(&format!(
        "PROCESS COMPLETE | Success: {} | Failed: {}",
        report.success, report.failure
    ));
    output::print_separator();

    if report.total() > 1 {
        println!("{}", Table::new(result_rows(report)));
    }
}

fn result_rows(report: &BatchReport) -> Vec<ResultRow> {
    report
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| ResultRow {
            index: i + 1,
            file: r.file.display().to_string(),
            status: r.outcome.to_string(),
            exit_code: exit_code_text(r.exit_code),
        })
        .collect()
}

fn exit_code_text(code: Option<i32>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::ProcessOutput;

    use std::cell::Cell;
    use std::ffi::OsString;
    use std::io;
    use std::path::PathBuf;

    /// 只通过第一次存在性检查的启动器，每次启动都成功
    #[derive(Default)]
    struct VanishingLauncher {
        checks: Cell<usize>,
    }

    impl Launcher for VanishingLauncher {
        fn exists(&self, _program: &Path) -> bool {
            let n = self.checks.get();
            self.checks.set(n + 1);
            n == 0
        }

        fn launch(&self, _program: &Path, _args: &[OsString]) -> io::Result<ProcessOutput> {
            Ok(ProcessOutput {
                exit_code: Some(0),
                stdout: "Successfully signed".to_string(),
                stderr: String::new(),
            })
        }
    }

    fn batch_args(dir: &Path, report: Option<PathBuf>) -> SignArgs {
        for name in ["a.exe", "b.exe"] {
            std::fs::write(dir.join(name), b"MZ").unwrap();
        }
        SignArgs {
            targets: vec![dir.join("a.exe"), dir.join("b.exe")],
            cert: dir.join("cert.pfx"),
            password: None,
            batch: true,
            pattern: "*.exe".to_string(),
            recursive: false,
            signtool: Some(dir.join("signtool.exe")),
            report,
            no_output: true,
        }
    }

    #[test]
    fn test_result_rows() {
        let mut report = BatchReport::default();
        report.push(SigningResult::from_exit(Path::new("a.exe"), Some(0), String::new(), String::new()));
        report.push(SigningResult::invocation_error(Path::new("b.exe"), "denied"));

        let rows = result_rows(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].status, "success");
        assert_eq!(rows[0].exit_code, "0");
        assert_eq!(rows[1].status, "failure");
        assert_eq!(rows[1].exit_code, "-");
    }

    #[test]
    fn test_multiple_targets_require_batch() {
        let args = SignArgs {
            targets: vec!["a.exe".into(), "b.exe".into()],
            cert: "cert.pfx".into(),
            password: None,
            batch: false,
            pattern: "*.exe".to_string(),
            recursive: false,
            signtool: None,
            report: None,
            no_output: true,
        };
        let err = execute(args, true).unwrap_err();
        assert!(matches!(err, SignError::InvalidArgument(_)));
    }

    #[test]
    fn test_missing_signtool_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a.exe");
        std::fs::write(&target, b"MZ").unwrap();

        let args = SignArgs {
            targets: vec![target],
            cert: dir.path().join("cert.pfx"),
            password: Some(String::new()),
            batch: false,
            pattern: "*.exe".to_string(),
            recursive: false,
            signtool: Some(dir.path().join("signtool.exe")),
            report: None,
            no_output: true,
        };
        match execute(args, true).unwrap_err() {
            SignError::SignerNotFound { partial, .. } => assert!(partial.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_aborted_batch_writes_partial_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.csv");
        let args = batch_args(dir.path(), Some(report.clone()));

        match execute_with(args, true, VanishingLauncher::default()).unwrap_err() {
            SignError::SignerNotFound { partial, .. } => assert_eq!(partial.total(), 1),
            other => panic!("unexpected error: {other:?}"),
        }

        let content = std::fs::read_to_string(&report).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().nth(1).unwrap().contains("a.exe"));
    }

    #[test]
    fn test_partial_report_failure_keeps_signer_error() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("missing").join("report.csv");
        let args = batch_args(dir.path(), Some(report.clone()));

        match execute_with(args, true, VanishingLauncher::default()).unwrap_err() {
            SignError::SignerNotFound { partial, .. } => {
                assert_eq!(partial.total(), 1);
                assert_eq!(partial.results[0].file_name(), "a.exe");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!report.exists());
    }

    #[test]
    fn test_stdout_report_silences_presentation() {
        let dir = tempfile::tempdir().unwrap();

        let args = batch_args(dir.path(), Some(PathBuf::from("-")));
        assert!(presentation_quiet(&args, false));

        let args = batch_args(dir.path(), Some(dir.path().join("report.csv")));
        assert!(!presentation_quiet(&args, false));
        assert!(presentation_quiet(&args, true));

        let args = batch_args(dir.path(), None);
        assert!(!presentation_quiet(&args, false));
    }
}
