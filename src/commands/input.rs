//! # TeraChem 输入生成
//!
//! 解析关键词标志、选择计算类型、合成关键词，然后在新的编号工作目录中
//! 写出 `tc_<type>.in`。
//!
//! ## 功能
//! - 在任何文件系统操作之前完成计算类型检查
//! - 复制 `qmindices`, `prmtop`, `coordinates` 引用的文件
//! - 输出文件句柄限定在作用域内，任何返回路径上都会被关闭
//! - 失败时保留已创建的工作目录以便检查
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `cli/flags.rs`, `keywords/`
//! - 使用 `utils/workdir.rs`, `utils/output.rs`

use crate::cli::flags::{FlagSet, RunSwitches};
use crate::error::{AutoQuantumError, Result};
use crate::keywords::{resolve, select, InputDeck, KeywordMap, Resolution, Selection};
use crate::utils::{output, workdir};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tabled::Tabled;

/// 会被复制进工作目录的文件型关键词
pub const FILE_KEYWORDS: [&str; 3] = ["qmindices", "prmtop", "coordinates"];

/// 一次运行的内存中计划
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub switches: RunSwitches,
    pub selection: Selection,
    pub resolution: Resolution,
}

/// 已写出的输入
#[derive(Debug, Clone)]
pub struct GeneratedInput {
    pub selection: Selection,
    /// 合成后的关键词（输出前的副本）
    pub keywords: KeywordMap,
    pub workdir: PathBuf,
    pub input_path: PathBuf,
}

#[derive(Tabled)]
struct KeywordRow {
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

/// 解析命令行片段并合成关键词（无文件系统副作用）
pub fn plan_run(tokens: &[String]) -> Result<RunPlan> {
    let parsed = FlagSet::from_tokens(tokens.iter().cloned());
    let mut flags = parsed.flags;

    let switches = flags.take_run_switches();
    output::set_debug(switches.debug);

    for token in &parsed.stray {
        output::print_warning(&format!("Ignoring '{}': not preceded by a --flag", token));
    }
    for (key, values) in flags.iter() {
        let shown = if values.is_empty() {
            " <EMPTY FLAG> ".to_string()
        } else {
            values.join(", ")
        };
        output::print_debug(&format!("(Key) {} : (Values) {}", key, shown));
    }

    let selection = select(&mut flags)?;
    output::print_info(&format!(
        "Calculation type: {}{}",
        selection.calc_type,
        if selection.use_casscf { " (CASSCF)" } else { "" }
    ));

    let resolution = resolve(&flags, &selection);

    for (key, ignored) in &resolution.ignored_values {
        output::print_warning(&format!(
            "--{} takes a single value; ignoring {}",
            key,
            ignored.join(" ")
        ));
    }
    for key in &resolution.bare_flags {
        output::print_warning(&format!("--{} has no value and was ignored", key));
    }

    let rows: Vec<KeywordRow> = resolution
        .keywords
        .iter()
        .map(|(k, v)| KeywordRow {
            keyword: k.clone(),
            value: v.clone(),
            source: resolution.sources.get(k).map(|s| s.to_string()).unwrap_or_default(),
        })
        .collect();
    output::print_debug_table("Resolved Keywords", &rows);

    Ok(RunPlan {
        switches,
        selection,
        resolution,
    })
}

/// 创建工作目录并写出输入文件
pub fn write_input(
    plan: &RunPlan,
    workdir_base: &Path,
    generated_at: &str,
) -> Result<GeneratedInput> {
    let workdir = workdir::create_numbered_dir(workdir_base, workdir::COUNTER_WIDTH)?;

    match populate_workdir(plan, &workdir, generated_at) {
        Ok(input_path) => {
            output::print_success(&format!("Wrote {}", input_path.display()));
            Ok(GeneratedInput {
                selection: plan.selection,
                keywords: plan.resolution.keywords.clone(),
                workdir,
                input_path,
            })
        }
        Err(e) => {
            output::print_warning(&format!(
                "Working directory {} was left in place for inspection",
                workdir.display()
            ));
            Err(e)
        }
    }
}

/// 解析、合成并写出输入；计算类型错误时不创建任何目录
pub fn generate(
    tokens: &[String],
    workdir_base: &Path,
    generated_at: &str,
) -> Result<(RunPlan, GeneratedInput)> {
    let plan = plan_run(tokens)?;
    let generated = write_input(&plan, workdir_base, generated_at)?;
    Ok((plan, generated))
}

fn populate_workdir(plan: &RunPlan, workdir: &Path, generated_at: &str) -> Result<PathBuf> {
    let keywords = &plan.resolution.keywords;
    for key in FILE_KEYWORDS {
        if let Some(value) = keywords.get(key) {
            workdir::copy_into(Path::new(value), workdir)?;
        }
    }
    output::print_info(&format!("Copied relevant input files to {}", workdir.display()));

    let mut remaining = keywords.clone();
    let deck = InputDeck::build(&mut remaining, plan.selection.use_casscf, generated_at);

    let input_path = workdir.join(plan.selection.calc_type.input_filename());
    write_deck(&deck, &input_path)?;
    Ok(input_path)
}

fn write_deck(deck: &InputDeck, path: &Path) -> Result<()> {
    let to_error = |e: std::io::Error| AutoQuantumError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", deck).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    Ok(())
}
