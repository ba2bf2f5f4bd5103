//! # TeraChem 关键词引擎
//!
//! 由默认值表与用户标志合成完整的关键词集合，并按固定分节顺序输出。
//!
//! ## 流程
//! 1. `selector`  - 确定唯一的计算类型，移除类型标志
//! 2. `resolver`  - 通用默认值 → 类型默认值 → CASSCF 默认值 → 用户值，逐层覆盖
//! 3. `formatter` - 逐节输出并从映射中移除已输出的关键词
//!
//! ## 依赖关系
//! - 被 `commands/input.rs` 使用
//! - 使用 `cli/flags.rs`, `models/calculation.rs`
//! - 子模块: defaults, selector, resolver, formatter

pub mod defaults;
pub mod formatter;
pub mod resolver;
pub mod selector;

use std::collections::BTreeMap;

/// 关键词映射：关键词 → 单个取值，按关键词字典序遍历
pub type KeywordMap = BTreeMap<String, String>;

pub use formatter::InputDeck;
pub use resolver::{resolve, Resolution};
pub use selector::{select, Selection};
