//! # 签名报告导出
//!
//! 将 `BatchReport` 导出为 CSV，每个文件一行。
//!
//! ## 依赖关系
//! - 被 `commands/sign.rs` 调用
//! - 使用 `models/report.rs` 的 `BatchReport`
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{Result, SignError};
use crate::models::{BatchReport, Outcome};

use serde::Serialize;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    file: String,
    status: Outcome,
    exit_code: Option<i32>,
    error: Option<&'a str>,
    stdout: &'a str,
    stderr: &'a str,
}

/// 导出报告为 CSV 文件
pub fn to_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    let wtr = csv::Writer::from_path(output_path)?;
    write_rows(report, wtr, &output_path.display().to_string())
}

/// 导出报告为 CSV 字符串
pub fn to_csv_string(report: &BatchReport) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(report, csv::Writer::from_writer(&mut buf), "<memory>")?;
    Ok(String::from_utf8_lossy(&buf).to_string())
}

fn write_rows<W: std::io::Write>(
    report: &BatchReport,
    mut wtr: csv::Writer<W>,
    label: &str,
) -> Result<()> {
    for result in &report.results {
        wtr.serialize(ReportRow {
            file: result.file.display().to_string(),
            status: result.outcome,
            exit_code: result.exit_code,
            error: result.error.as_deref(),
            stdout: result.stdout.trim_end(),
            stderr: result.stderr.trim_end(),
        })?;
    }

    wtr.flush().map_err(|e| SignError::FileWriteError {
        path: label.to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SigningResult;

    fn sample_report() -> BatchReport {
        let mut report = BatchReport::default();
        report.push(SigningResult::from_exit(
            Path::new("a.exe"),
            Some(0),
            "Successfully signed: a.exe\r\n".to_string(),
            String::new(),
        ));
        report.push(SigningResult::from_exit(
            Path::new("b.exe"),
            Some(1),
            String::new(),
            "SignTool Error: No certificates were found.\n".to_string(),
        ));
        report.push(SigningResult::invocation_error(Path::new("c.exe"), "access denied"));
        report
    }

    #[test]
    fn test_csv_rows() {
        let csv = to_csv_string(&sample_report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "file,status,exit_code,error,stdout,stderr");
        assert_eq!(lines[1], "a.exe,success,0,,Successfully signed: a.exe,");
        assert_eq!(
            lines[2],
            "b.exe,failure,1,,,SignTool Error: No certificates were found."
        );
        assert_eq!(lines[3], "c.exe,failure,,access denied,,");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        to_csv(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("file,status,exit_code"));
        assert_eq!(content.lines().count(), 4);
    }
}
