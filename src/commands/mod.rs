//! # 命令执行模块
//!
//! 串联输入生成与作业启动。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `keywords/`, `utils/`
//! - 子模块: input, launch

pub mod input;
pub mod launch;

use crate::cli::Cli;
use crate::error::Result;
use crate::keywords::formatter::timestamp_now;
use crate::utils::output;

use std::path::Path;

/// 执行一次 AutoQuantum 运行
pub fn run(cli: Cli) -> Result<()> {
    output::print_header("AutoQuantum w/ TeraChem");

    // 在创建任何目录之前检查选项
    let batch_host = launch::batch_host_pattern(&cli.launch.batch_host)?;

    let (plan, generated) = input::generate(
        &cli.tokens,
        Path::new(&cli.launch.workdir_base),
        &timestamp_now(),
    )?;
    output::print_debug("Input generation completed.");

    if plan.switches.dry_run {
        output::print_info(&format!("Input file: {}", generated.input_path.display()));
        output::print_separator();
        output::print_done(
            "DRYRUN flag was invoked.  Input files have been generated, but TeraChem will not be run at this time.",
        );
        return Ok(());
    }

    launch::execute(&generated, &cli.launch, &batch_host)?;

    output::print_separator();
    output::print_done(&format!("Job directory: {}", generated.workdir.display()));
    Ok(())
}
