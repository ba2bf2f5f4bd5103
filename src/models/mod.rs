//! # 数据模型模块
//!
//! 定义计算类型及其派生的文件名。
//!
//! ## 依赖关系
//! - 被 `keywords/`, `commands/` 和 `utils/slurm.rs` 使用
//! - 子模块: calculation

pub mod calculation;

pub use calculation::CalcType;
