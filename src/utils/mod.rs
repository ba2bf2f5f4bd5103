//! # 工具函数模块
//!
//! 提供美化输出、进度指示、Slurm 脚本生成、工作目录与外部命令等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, progress, shell, slurm, workdir

pub mod output;
pub mod progress;
pub mod shell;
pub mod slurm;
pub mod workdir;
