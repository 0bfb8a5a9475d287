//! # 数据模型模块
//!
//! 定义签名任务与签名结果数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `signer/` 和 `commands/` 使用
//! - 子模块: job, report

pub mod job;
pub mod report;

pub use job::SigningJob;
pub use report::{BatchReport, Outcome, SigningResult};
