//! # 目标文件收集器
//!
//! 根据命令行给出的路径收集待签名文件列表。
//!
//! ## 功能
//! - 文件参数按原样保留
//! - 批量模式下展开目录（glob 模式匹配，可递归）
//! - 去重并保持首次出现的顺序
//!
//! ## 依赖关系
//! - 被 `commands/sign.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{Result, SignError};

use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认匹配模式：Windows 可执行文件
pub const DEFAULT_PATTERN: &str = "*.exe,*.dll";

/// 目标文件收集器
pub struct FileCollector {
    /// 输入路径（文件或目录）
    inputs: Vec<PathBuf>,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
    /// 是否允许展开目录
    expand_dirs: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            patterns: Self::parse_patterns(DEFAULT_PATTERN).unwrap_or_default(),
            recursive: false,
            expand_dirs: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let patterns = Self::parse_patterns(pattern)?;
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 设置是否展开目录参数
    pub fn expand_dirs(mut self, expand: bool) -> Self {
        self.expand_dirs = expand;
        self
    }

    /// 收集所有目标文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_file() {
                if seen.insert(input.clone()) {
                    files.push(input.clone());
                }
                continue;
            }

            if !input.is_dir() {
                return Err(SignError::FileNotFound {
                    path: input.display().to_string(),
                });
            }

            if !self.expand_dirs {
                return Err(SignError::InvalidArgument(format!(
                    "'{}' is a directory; use --batch to sign every matching file inside it",
                    input.display()
                )));
            }

            for file in self.walk(input) {
                if seen.insert(file.clone()) {
                    files.push(file);
                }
            }
        }

        if files.is_empty() {
            return Err(SignError::NoFilesFound {
                pattern: self.pattern_text(),
            });
        }

        Ok(files)
    }

    /// 遍历目录，返回排序后的匹配文件
    fn walk(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut matched: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map_or(false, |name| self.matches(name))
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        matched.sort();
        matched
    }

    /// 检查文件名是否匹配任一模式（忽略大小写）
    fn matches(&self, filename: &str) -> bool {
        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };
        self.patterns
            .iter()
            .any(|p| p.matches_with(filename, options))
    }

    fn parse_patterns(pattern: &str) -> Result<Vec<Pattern>> {
        pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    SignError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect()
    }

    fn pattern_text(&self) -> String {
        self.patterns
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
