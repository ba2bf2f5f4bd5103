//! # 关键词标志解析
//!
//! 将 `--<flag> [value ...]` 形式的原始命令行片段整理为标志集合。
//!
//! ## 规则
//! - 以 `--` 开头的片段开启一个新标志，并清空（初始化）它的值列表
//! - 其余片段追加到当前标志的值列表
//! - 出现在任何标志之前的片段被丢弃，交由调用方警告
//!
//! ## 依赖关系
//! - 被 `commands/input.rs` 使用
//! - 结果传递给 `keywords/selector.rs`, `keywords/resolver.rs`

use std::collections::BTreeMap;

/// 解析状态机
enum ParseState {
    /// 尚未遇到任何标志
    AwaitingFlag,
    /// 正在为某个标志收集值
    AccumulatingValues(String),
}

/// 标志集合：标志名（区分大小写）到值列表的映射
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: BTreeMap<String, Vec<String>>,
}

/// 解析结果
#[derive(Debug, Default)]
pub struct ParsedFlags {
    pub flags: FlagSet,
    /// 出现在第一个标志之前、被丢弃的片段
    pub stray: Vec<String>,
}

/// 运行开关（在关键词解析之前从标志集合中移除）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSwitches {
    pub debug: bool,
    pub dry_run: bool,
}

impl FlagSet {
    /// 从命令行片段构建标志集合
    pub fn from_tokens<I, S>(tokens: I) -> ParsedFlags
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = ParsedFlags::default();
        let mut state = ParseState::AwaitingFlag;

        for token in tokens {
            let token: String = token.into();
            if let Some(name) = token.strip_prefix("--") {
                parsed.flags.flags.insert(name.to_string(), Vec::new());
                state = ParseState::AccumulatingValues(name.to_string());
                continue;
            }

            match &state {
                ParseState::AwaitingFlag => parsed.stray.push(token),
                ParseState::AccumulatingValues(name) => {
                    parsed.flags.flags.entry(name.clone()).or_default().push(token);
                }
            }
        }

        parsed
    }

    /// 是否包含某标志
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// 获取某标志的值列表
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.flags.get(name).map(|v| v.as_slice())
    }

    /// 移除并返回某标志的值列表
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.flags.remove(name)
    }

    /// 按标志名顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// 移除 `debug`/`DEBUG` 与 `dryrun`/`DRYRUN` 开关
    pub fn take_run_switches(&mut self) -> RunSwitches {
        let mut switches = RunSwitches::default();
        for name in ["debug", "DEBUG"] {
            if self.remove(name).is_some() {
                switches.debug = true;
            }
        }
        for name in ["dryrun", "DRYRUN"] {
            if self.remove(name).is_some() {
                switches.dry_run = true;
            }
        }
        switches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_and_values() {
        let parsed = FlagSet::from_tokens(["--spe", "--coordinates", "mol.xyz", "--charge", "-1"]);
        let flags = parsed.flags;
        assert!(parsed.stray.is_empty());
        assert_eq!(flags.len(), 3);
        assert_eq!(flags.get("spe"), Some(&[][..]));
        assert_eq!(flags.get("coordinates").unwrap(), ["mol.xyz"]);
        // 单个 '-' 开头的值不是标志
        assert_eq!(flags.get("charge").unwrap(), ["-1"]);
    }

    #[test]
    fn test_repeated_flag_resets_values() {
        let parsed = FlagSet::from_tokens(["--basis", "sto-3g", "--basis", "6-31g", "extra"]);
        assert_eq!(parsed.flags.get("basis").unwrap(), ["6-31g", "extra"]);
    }

    #[test]
    fn test_stray_tokens_before_first_flag() {
        let parsed = FlagSet::from_tokens(["leftover", "--opt"]);
        assert_eq!(parsed.stray, vec!["leftover".to_string()]);
        assert!(parsed.flags.contains("opt"));
    }

    #[test]
    fn test_flag_names_are_case_sensitive() {
        let parsed = FlagSet::from_tokens(["--Charge", "1"]);
        assert!(parsed.flags.contains("Charge"));
        assert!(!parsed.flags.contains("charge"));
    }

    #[test]
    fn test_take_run_switches() {
        let mut flags = FlagSet::from_tokens(["--DEBUG", "--dryrun", "--spe", "--debug"]).flags;
        let switches = flags.take_run_switches();
        assert!(switches.debug);
        assert!(switches.dry_run);
        assert_eq!(flags.len(), 1);
        assert!(flags.contains("spe"));

        let mut flags = FlagSet::from_tokens(["--freq"]).flags;
        assert_eq!(flags.take_run_switches(), RunSwitches::default());
    }
}
