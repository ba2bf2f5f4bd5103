//! # AutoQuantum - TeraChem 输入生成与作业启动
//!
//! 把 `--<keyword> <value>` 形式的命令行标志转换为 TeraChem 输入文件，
//! 在新的编号工作目录中写出，然后根据主机提交 Slurm 作业或直接运行。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义与关键词标志解析)
//!   ├── commands/   (输入生成与作业启动)
//!   │     ├── keywords/  (默认值表、类型选择、关键词合成、分节输出)
//!   │     └── models/    (计算类型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod keywords;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        if e.is_usage_error() {
            utils::output::print_usage(cli::USAGE_TEXT);
        }
        let mut msg = e.to_string();
        if let Some(source) = std::error::Error::source(&e) {
            msg.push_str(&format!(" ({})", source));
        }
        utils::output::print_error(&msg);
        std::process::exit(1);
    }
}
