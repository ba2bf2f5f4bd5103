//! # TeraChem 输入文件分节输出
//!
//! 每一节由标题和有序关键词列表描述，由同一个例程依次"取出并输出"：
//! 关键词一旦输出就从映射中移除，因此同一关键词只会出现一次，
//! 属于多个分类时以排在前面的分节为准。剩余关键词全部进入最后的
//! `Uncategorized` 分节。
//!
//! ## 输出格式
//! ```text
//! # Generated by AutoQuantum for use with TeraChem on 2024.01.31 12:00:00
//! # Inputs
//! coordinates            mol.xyz
//! charge                 0
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/input.rs` 使用
//! - 使用 `chrono` 生成时间戳

use super::KeywordMap;

use std::fmt;

/// 关键词列宽下限
pub const MIN_KEY_WIDTH: usize = 19;

/// 关键词与取值之间至少保留的空格数
pub const KEY_PADDING: usize = 4;

/// 生成时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// 分节定义
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub keys: &'static [&'static str],
}

/// 固定输出的分节，按顺序排列
pub const STANDARD_SECTIONS: &[Section] = &[
    Section {
        heading: "# Inputs ",
        keys: &["prmtop", "coordinates", "qmindices", "charge", "spinmult"],
    },
    Section {
        heading: "# Methods ",
        keys: &["method", "basis"],
    },
    Section {
        heading: "# Calculation Settings ",
        keys: &[
            "run",
            "new_minimizer",
            "min_coordinates",
            "mincheck",
            "nstep",
            "min_maxallowedstep",
            "timestep",
            "mdbc",
            "orbitalswrtfrq",
        ],
    },
    Section {
        heading: "# Convergence Criteria ",
        keys: &["threall", "convthre", "precision", "maxit", "scf"],
    },
    Section {
        heading: "# Computing Resources Information ",
        keys: &["gpus", "gpumem", "scrdir"],
    },
];

/// CASSCF 分节，仅在 `--casscf` 时输出
pub const CASSCF_SECTION: Section = Section {
    heading: "# CASSCF Keywords ",
    keys: &[
        "casscf",
        "alphacas",
        "alpha",
        "castarget",
        "castargetmult",
        "cassinglets",
        "casscfmacromaxiter",
        "casscfmaxiter",
        "casscftrustmaxiter",
        "casscfmicroconvthre",
        "casscfmacroconvthre",
        "casscfconvthre",
        "casscfenergyconvthre",
        "cpsacasscfmaxiter",
        "cpsacasscfconvthre",
        "closed",
        "active",
        "casguess",
        "cascharges",
        "ci_solver",
    ],
};

pub const UNCATEGORIZED_HEADING: &str = "# Uncategorized Keywords ";

/// 已取出的一节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub heading: &'static str,
    pub entries: Vec<(String, String)>,
}

/// 完整的 TeraChem 输入文件内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDeck {
    pub generated_at: String,
    /// 关键词列宽（含填充）
    pub width: usize,
    pub sections: Vec<RenderedSection>,
}

/// 关键词列宽: max(19, 最长关键词) + 4
pub fn padding_width(keywords: &KeywordMap) -> usize {
    let longest = keywords.keys().map(|k| k.len()).max().unwrap_or(0);
    longest.max(MIN_KEY_WIDTH) + KEY_PADDING
}

/// 当前本地时间，用于输入文件首行
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// 按关键词列表顺序取出存在的关键词，缺失的直接跳过
fn drain_section(keywords: &mut KeywordMap, section: &Section) -> RenderedSection {
    let entries = section
        .keys
        .iter()
        .filter_map(|key| keywords.remove_entry(*key))
        .collect();

    RenderedSection {
        heading: section.heading,
        entries,
    }
}

impl InputDeck {
    /// 取出映射中的全部关键词并分节；返回时 `keywords` 为空
    pub fn build(
        keywords: &mut KeywordMap,
        use_casscf: bool,
        generated_at: impl Into<String>,
    ) -> Self {
        let width = padding_width(keywords);

        let mut sections: Vec<RenderedSection> = STANDARD_SECTIONS
            .iter()
            .map(|section| drain_section(keywords, section))
            .collect();

        if use_casscf {
            sections.push(drain_section(keywords, &CASSCF_SECTION));
        }

        sections.push(RenderedSection {
            heading: UNCATEGORIZED_HEADING,
            entries: std::mem::take(keywords).into_iter().collect(),
        });

        InputDeck {
            generated_at: generated_at.into(),
            width,
            sections,
        }
    }

    /// 所有分节中输出的关键词
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter().map(|(k, _)| k.as_str()))
    }

    /// 查找某分节
    pub fn section(&self, heading: &str) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

impl fmt::Display for InputDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Generated by AutoQuantum for use with TeraChem on {}",
            self.generated_at
        )?;
        for section in &self.sections {
            writeln!(f, "{}", section.heading)?;
            for (key, value) in &section.entries {
                writeln!(f, "{:<width$}{}", key, value, width = self.width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::flags::FlagSet;
    use crate::keywords::{resolve, select};
    use std::collections::BTreeSet;

    const STAMP: &str = "2024.01.31 12:00:00";

    fn resolved(tokens: &[&str]) -> (KeywordMap, bool) {
        let mut flags = FlagSet::from_tokens(tokens.iter().copied()).flags;
        let selection = select(&mut flags).unwrap();
        (resolve(&flags, &selection).keywords, selection.use_casscf)
    }

    #[test]
    fn test_spe_layout() {
        let (mut keywords, casscf) =
            resolved(&["--spe", "--coordinates", "mol.xyz", "--charge", "-1"]);
        let deck = InputDeck::build(&mut keywords, casscf, STAMP);
        let text = deck.to_string();

        assert!(keywords.is_empty());
        assert!(text.starts_with(
            "# Generated by AutoQuantum for use with TeraChem on 2024.01.31 12:00:00\n# Inputs \n"
        ));
        // 19 + 4 列宽
        assert!(text.contains("\ncoordinates            mol.xyz\n"));
        assert!(text.contains("\ncharge                 -1\n"));
        assert!(text.contains("# Calculation Settings \nrun                    energy\n\n"));
        assert!(text.contains("# Uncategorized Keywords \n\n\n"));
        assert!(text.ends_with("\n\n\n"));
        assert!(!text.contains("# CASSCF Keywords"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let (keywords, casscf) = resolved(&["--bomd", "--nstep", "20", "--custom", "x"]);
        let first = InputDeck::build(&mut keywords.clone(), casscf, STAMP).to_string();
        let second = InputDeck::build(&mut keywords.clone(), casscf, STAMP).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_key_emitted_exactly_once() {
        let (keywords, casscf) = resolved(&[
            "--opt",
            "--casscf",
            "--prmtop",
            "sys.prmtop",
            "--zeta",
            "1",
            "--alpha_custom",
            "2",
        ]);
        let expected: BTreeSet<String> = keywords.keys().cloned().collect();

        let deck = InputDeck::build(&mut keywords.clone(), casscf, STAMP);
        let emitted: Vec<&str> = deck.keys().collect();
        let unique: BTreeSet<String> = emitted.iter().map(|k| k.to_string()).collect();

        assert_eq!(emitted.len(), unique.len());
        assert_eq!(unique, expected);

        let rest = deck.section(UNCATEGORIZED_HEADING).unwrap();
        let rest_keys: Vec<&str> = rest.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(rest_keys, vec!["alpha_custom", "zeta"]);
    }

    #[test]
    fn test_first_section_wins() {
        let mut keywords = KeywordMap::new();
        keywords.insert("run".to_string(), "energy".to_string());
        keywords.insert("casscf".to_string(), "yes".to_string());
        let deck = InputDeck::build(&mut keywords, true, STAMP);
        let casscf = deck.section(CASSCF_SECTION.heading).unwrap();
        assert_eq!(casscf.entries, vec![("casscf".to_string(), "yes".to_string())]);
        assert!(deck.section(UNCATEGORIZED_HEADING).unwrap().entries.is_empty());
    }

    #[test]
    fn test_casscf_section_toggle() {
        let (mut keywords, casscf) = resolved(&["--freq", "--casscf"]);
        assert!(casscf);
        let text = InputDeck::build(&mut keywords, casscf, STAMP).to_string();
        assert!(text.contains("# CASSCF Keywords \n"));
        assert!(text.contains("\ncasscfenergyconvthre    1e-04\n"));

        let (mut keywords, casscf) = resolved(&["--freq"]);
        let text = InputDeck::build(&mut keywords, casscf, STAMP).to_string();
        assert!(!text.contains("# CASSCF Keywords"));
    }

    #[test]
    fn test_padding_width() {
        let (keywords, _) = resolved(&["--bomd"]);
        assert_eq!(padding_width(&keywords), 23);

        let long_key = "a_really_long_custom_keyword";
        let long_flag = format!("--{}", long_key);
        let (keywords, _) = resolved(&["--bomd", long_flag.as_str(), "1"]);
        assert_eq!(padding_width(&keywords), long_key.len() + 4);

        let mut keywords = keywords;
        let text = InputDeck::build(&mut keywords, false, STAMP).to_string();
        assert!(text.contains(&format!("\n{}    1\n", long_key)));
        assert!(text.contains(&format!("\n{:<32}bomd\n", "run")));
    }

    #[test]
    fn test_missing_keys_leave_no_blank_lines() {
        let mut keywords = KeywordMap::new();
        keywords.insert("basis".to_string(), "sto-3g".to_string());
        let text = InputDeck::build(&mut keywords, false, STAMP).to_string();
        assert!(text.contains("# Inputs \n\n# Methods \nbasis                  sto-3g\n\n"));
    }
}
