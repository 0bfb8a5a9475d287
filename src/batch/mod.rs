//! # 批量处理模块
//!
//! 提供目标文件收集、串行签名执行与报告导出。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配文件列表
//! - 逐个调用签名程序
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/sign.rs` 使用
//! - 使用 `indicatif` 显示进度，`csv` 导出报告

pub mod collector;
pub mod export;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchEvent, BatchRunner};
