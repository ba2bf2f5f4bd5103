//! # 关键词合成
//!
//! 按固定顺序逐层写入，后写入者覆盖先写入者：
//! 1. 通用默认值
//! 2. 计算类型默认值
//! 3. CASSCF 默认值（仅 `use_casscf`）
//! 4. 用户标志（每个标志只取第一个值）
//!
//! 合成过程只覆盖、不删除，也不会失败。
//!
//! ## 依赖关系
//! - 被 `commands/input.rs` 使用
//! - 使用 `keywords/defaults.rs`, `keywords/selector.rs`, `cli/flags.rs`

use super::defaults::{self, DefaultTable};
use super::selector::Selection;
use super::KeywordMap;
use crate::cli::flags::FlagSet;

use std::collections::BTreeMap;

/// 关键词取值的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSource {
    Universal,
    CalcType,
    Casscf,
    User,
}

impl std::fmt::Display for KeywordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordSource::Universal => write!(f, "default"),
            KeywordSource::CalcType => write!(f, "calc-type default"),
            KeywordSource::Casscf => write!(f, "casscf default"),
            KeywordSource::User => write!(f, "user"),
        }
    }
}

/// 合成结果
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// 最终关键词映射
    pub keywords: KeywordMap,
    /// 每个关键词最终取值的来源
    pub sources: BTreeMap<String, KeywordSource>,
    /// 多值标志中被忽略的额外值 (标志名, 被忽略的值)
    pub ignored_values: Vec<(String, Vec<String>)>,
    /// 没有给出值、因此未写入的标志
    pub bare_flags: Vec<String>,
}

impl Resolution {
    fn apply_table(&mut self, table: DefaultTable, source: KeywordSource) {
        for (key, value) in table {
            self.set(key.to_string(), value.to_string(), source);
        }
    }

    fn set(&mut self, key: String, value: String, source: KeywordSource) {
        self.sources.insert(key.clone(), source);
        self.keywords.insert(key, value);
    }
}

/// 由选择结果与剩余用户标志合成完整关键词映射
pub fn resolve(flags: &FlagSet, selection: &Selection) -> Resolution {
    let mut resolution = Resolution::default();

    resolution.apply_table(defaults::UNIVERSAL, KeywordSource::Universal);
    resolution.apply_table(
        defaults::for_calc_type(selection.calc_type),
        KeywordSource::CalcType,
    );
    if selection.use_casscf {
        resolution.apply_table(defaults::CASSCF, KeywordSource::Casscf);
    }

    for (key, values) in flags.iter() {
        let Some((first, rest)) = values.split_first() else {
            resolution.bare_flags.push(key.clone());
            continue;
        };
        if !rest.is_empty() {
            resolution.ignored_values.push((key.clone(), rest.to_vec()));
        }
        resolution.set(key.clone(), first.clone(), KeywordSource::User);
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::select;
    use crate::models::CalcType;

    fn resolve_tokens(tokens: &[&str]) -> Resolution {
        let mut flags = FlagSet::from_tokens(tokens.iter().copied()).flags;
        flags.take_run_switches();
        let selection = select(&mut flags).unwrap();
        resolve(&flags, &selection)
    }

    #[test]
    fn test_spe_scenario() {
        let r = resolve_tokens(&["--spe", "--coordinates", "mol.xyz", "--charge", "-1"]);
        assert_eq!(r.keywords["coordinates"], "mol.xyz");
        assert_eq!(r.keywords["charge"], "-1");
        assert_eq!(r.keywords["spinmult"], "1");
        assert_eq!(r.keywords["run"], "energy");
        assert_eq!(r.sources["charge"], KeywordSource::User);
        assert_eq!(r.sources["spinmult"], KeywordSource::Universal);
        assert_eq!(r.sources["run"], KeywordSource::CalcType);
    }

    #[test]
    fn test_every_default_present_for_each_type() {
        for calc_type in CalcType::SCAN_ORDER {
            let token = format!("--{}", calc_type.flag());
            let r = resolve_tokens(&[token.as_str(), "--method", "pbe0"]);
            for (key, _) in defaults::UNIVERSAL {
                assert!(r.keywords.contains_key(*key), "{} missing", key);
            }
            for (key, value) in defaults::for_calc_type(calc_type) {
                assert_eq!(r.keywords[*key], *value);
            }
            assert_eq!(r.keywords["method"], "pbe0");
            assert!(!r.keywords.contains_key("casscfmaxiter"));
        }
    }

    #[test]
    fn test_user_overrides_type_default() {
        let r = resolve_tokens(&["--bomd", "--nstep", "50", "--run", "md"]);
        assert_eq!(r.keywords["nstep"], "50");
        assert_eq!(r.keywords["run"], "md");
        assert_eq!(r.keywords["timestep"], "1.0");
    }

    #[test]
    fn test_casscf_defaults_merged_and_overridable() {
        let r = resolve_tokens(&["--freq", "--casscf", "--closed", "40"]);
        assert_eq!(r.keywords["casscf"], "no");
        assert_eq!(r.keywords["closed"], "40");
        assert_eq!(r.keywords["active"], "3");
        assert_eq!(r.sources["active"], KeywordSource::Casscf);

        let r = resolve_tokens(&["--freq", "--casscf", "yes"]);
        assert_eq!(r.keywords["casscf"], "yes");
        assert_eq!(r.sources["casscf"], KeywordSource::User);
    }

    #[test]
    fn test_only_first_value_is_used() {
        let r = resolve_tokens(&["--opt", "--basis", "sto-3g", "6-31g"]);
        assert_eq!(r.keywords["basis"], "sto-3g");
        assert_eq!(
            r.ignored_values,
            vec![("basis".to_string(), vec!["6-31g".to_string()])]
        );
    }

    #[test]
    fn test_bare_keyword_flag_sets_nothing() {
        let r = resolve_tokens(&["--opt", "--guess"]);
        assert!(!r.keywords.contains_key("guess"));
        assert_eq!(r.bare_flags, vec!["guess".to_string()]);
    }

    #[test]
    fn test_keys_not_normalized() {
        let r = resolve_tokens(&["--spe", "--CHARGE", "2"]);
        assert_eq!(r.keywords["charge"], "0");
        assert_eq!(r.keywords["CHARGE"], "2");
    }
}
