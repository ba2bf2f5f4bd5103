//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! - 启动配置选项（Slurm 队列、TeraChem 模块等，可由环境变量提供）
//! - 其后的所有 `--<flag> [value ...]` 片段原样收集，交给 `flags` 解析
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: flags, launch

pub mod flags;
pub mod launch;

use clap::Parser;

/// 命令行用法说明，计算类型选择错误时打印
pub const USAGE_TEXT: &str = r#"When using AutoQuantum, the command line must follow this format:
    autoquantum --<flag> [<value>]
such that all flags have the '--' to differentiate from a potential
single '-' such as seen when the formal charge is '-1'.  Some flags
do not require added values, however these are specific to AutoQuantum.
    --spe
    --bomd
    --freq
    --opt
    --casscf
The '--debug' flag will enable more verbose logging to the terminal,
which may be useful if you're having trouble.  The '--dryrun' flag
generates the working directory and input file without running TeraChem.
The '--spe', '--opt', '--freq', and '--bomd' flags are the major
calculation types that AutoQuantum is currently designed to handle.
All other flags must be immediately followed by a corresponding value.
During parsing, these flag/value pairs are compared to known TeraChem
keyword defaults and updated before generating the input file.  Thus,
if you want a purely default TeraChem single-point energy calculation
of a neutral singlet molecule, you can use a simple command:
    autoquantum --spe --coordinates <molecule.xyz>"#;

/// AutoQuantum - TeraChem 输入生成与作业启动工具
#[derive(Parser, Debug)]
#[command(name = "autoquantum")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Generate a TeraChem input from keyword flags and run or submit it", long_about = None)]
#[command(after_help = USAGE_TEXT)]
pub struct Cli {
    #[command(flatten)]
    pub launch: launch::LaunchArgs,

    /// Keyword flags: --spe|--opt|--freq|--bomd [--casscf] [--<keyword> <value> ...]
    #[arg(
        value_name = "KEYWORD_FLAGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}
