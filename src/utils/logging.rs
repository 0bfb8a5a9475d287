//! # 日志初始化
//!
//! 使用 `simplelog` 的 `TermLogger` 输出到 stderr，级别由 `-q` / `-v` 决定。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `log`, `simplelog` crate

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// 根据 quiet / verbose 计算日志级别
pub fn level_for(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Off,
        (_, 0) => LevelFilter::Warn,
        (_, 1) => LevelFilter::Info,
        (_, 2) => LevelFilter::Debug,
        (_, _) => LevelFilter::Trace,
    }
}

/// 初始化终端日志
pub fn init(quiet: bool, verbose: u8) {
    let log_level = level_for(quiet, verbose);

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Debug)
        .set_max_level(LevelFilter::Debug)
        .build();

    if TermLogger::init(log_level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        return;
    }

    log::debug!("Log Level: {log_level}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true, 3), LevelFilter::Off);
        assert_eq!(level_for(false, 0), LevelFilter::Warn);
        assert_eq!(level_for(false, 1), LevelFilter::Info);
        assert_eq!(level_for(false, 2), LevelFilter::Debug);
        assert_eq!(level_for(false, 7), LevelFilter::Trace);
    }
}
