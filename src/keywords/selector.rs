//! # 计算类型选择
//!
//! 按 spe → opt → freq → bomd 的固定顺序扫描裸标志，必须恰好命中一个。
//! 命中的类型标志会从标志集合中移除。
//!
//! ## 依赖关系
//! - 被 `commands/input.rs` 使用
//! - 使用 `cli/flags.rs`, `models/calculation.rs`

use crate::cli::flags::FlagSet;
use crate::error::{AutoQuantumError, Result};
use crate::models::CalcType;

/// 开启 CASSCF 扩展的标志名
pub const CASSCF_FLAG: &str = "casscf";

/// 选择结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub calc_type: CalcType,
    /// 是否合并 CASSCF 默认值并输出 CASSCF 分节
    pub use_casscf: bool,
}

/// 从标志集合中选出计算类型
///
/// 零个或多个类型标志均为配置错误；此时标志集合中的类型标志也已被移除，
/// 但调用方不应继续使用它。
pub fn select(flags: &mut FlagSet) -> Result<Selection> {
    let mut found = Vec::new();

    for calc_type in CalcType::SCAN_ORDER {
        if flags.remove(calc_type.flag()).is_some() {
            found.push(calc_type);
        }
    }

    let calc_type = match found.as_slice() {
        [] => return Err(AutoQuantumError::NoCalculationType),
        [single] => *single,
        many => {
            let names: Vec<String> = many.iter().map(|t| format!("--{}", t.flag())).collect();
            return Err(AutoQuantumError::MultipleCalculationTypes {
                found: names.join(", "),
            });
        }
    };

    // 带值的 --casscf 作为普通关键词保留，由用户值覆盖默认的 "casscf no"
    let use_casscf = match flags.get(CASSCF_FLAG) {
        Some([]) => {
            flags.remove(CASSCF_FLAG);
            true
        }
        Some(_) => true,
        None => false,
    };

    Ok(Selection {
        calc_type,
        use_casscf,
    })
}
