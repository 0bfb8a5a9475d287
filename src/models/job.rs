//! # 签名任务数据模型
//!
//! 一次签名批次的全部输入：目标文件、证书、密码、批量模式标记。
//!
//! ## 依赖关系
//! - 被 `commands/sign.rs` 构造
//! - 被 `batch/runner.rs`, `signer/mod.rs` 使用

use crate::error::{Result, SignError};

use std::path::PathBuf;

/// 签名任务（运行前一次性构造，运行后丢弃）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningJob {
    /// 待签名文件，顺序即执行顺序
    pub targets: Vec<PathBuf>,

    /// 证书文件 (.pfx)
    pub certificate: PathBuf,

    /// 证书密码，只经由 `with_password` 设置，从不为空字符串
    password: Option<String>,

    /// 批量模式，仅影响路径收集方式
    pub batch: bool,
}

impl SigningJob {
    pub fn new(targets: Vec<PathBuf>, certificate: impl Into<PathBuf>) -> Self {
        SigningJob {
            targets,
            certificate: certificate.into(),
            password: None,
            batch: false,
        }
    }

    /// 设置密码（空字符串被丢弃）
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password.filter(|p| !p.is_empty());
        self
    }

    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    /// 证书密码
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// 是否提供了密码
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// 运行前校验：目标列表与证书路径均不能为空
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(SignError::EmptyTargets);
        }
        if self.certificate.as_os_str().is_empty() {
            return Err(SignError::EmptyCertificate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_dropped() {
        let job = SigningJob::new(vec!["a.exe".into()], "cert.pfx").with_password(Some(String::new()));
        assert_eq!(job.password, None);
        assert_eq!(job.password(), None);
        assert!(!job.has_password());

        let job = SigningJob::new(vec!["a.exe".into()], "cert.pfx")
            .with_password(Some("hunter2".to_string()));
        assert_eq!(job.password(), Some("hunter2"));
        assert!(job.has_password());
    }

    #[test]
    fn test_validate() {
        let job = SigningJob::new(vec![], "cert.pfx");
        assert!(matches!(job.validate(), Err(SignError::EmptyTargets)));

        let job = SigningJob::new(vec!["a.exe".into()], "");
        assert!(matches!(job.validate(), Err(SignError::EmptyCertificate)));

        let job = SigningJob::new(vec!["a.exe".into()], "cert.pfx").with_batch(true);
        assert!(job.validate().is_ok());
    }
}
