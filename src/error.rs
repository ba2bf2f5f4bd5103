//! # 统一错误处理模块
//!
//! 定义 AutoQuantum 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// AutoQuantum 统一错误类型
#[derive(Error, Debug)]
pub enum AutoQuantumError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误（计算类型选择）
    // ─────────────────────────────────────────────────────────────
    #[error("No calculation type requested.  Please resubmit with single calculation type.")]
    NoCalculationType,

    #[error(
        "Multiple calculation types requested ({found}).  Please resubmit with single calculation type."
    )]
    MultipleCalculationTypes { found: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unable to create working directory: {path}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to open {path} for writing.  Check permissions")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} -> {to}")]
    FileCopyError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to run '{command}'")]
    CommandSpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AutoQuantumError {
    /// 是否需要向用户打印命令行用法
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            AutoQuantumError::NoCalculationType | AutoQuantumError::MultipleCalculationTypes { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AutoQuantumError>;
