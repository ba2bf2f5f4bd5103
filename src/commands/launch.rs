//! # TeraChem 作业启动
//!
//! 根据主机名决定提交 Slurm 作业还是直接运行 TeraChem。
//!
//! ## 功能
//! - 主机名匹配 `--batch-host` 正则时生成并提交 sbatch 脚本
//! - 否则在工作目录内直接运行（必要时先 `module load`）
//! - PATH 中缺失的程序只给出警告
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `commands/input.rs` 的输出
//! - 使用 `utils/slurm.rs`, `utils/shell.rs`, `utils/progress.rs`

use crate::cli::launch::LaunchArgs;
use crate::commands::input::GeneratedInput;
use crate::error::{AutoQuantumError, Result};
use crate::utils::slurm::{
    generate_sbatch_script, terachem_command, SlurmConfig, BATCH_SCRIPT_NAME,
};
use crate::utils::{output, progress, shell};

use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// 编译批处理主机名匹配规则
pub fn batch_host_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        AutoQuantumError::InvalidArgument(format!("--batch-host '{}': {}", pattern, e))
    })
}

/// 提交或直接运行
pub fn execute(generated: &GeneratedInput, args: &LaunchArgs, batch_host: &Regex) -> Result<()> {
    let host = shell::host_name();
    output::print_debug(&format!("Host name: '{}'", host));

    if batch_host.is_match(&host) {
        output::print_debug("Submitting batch job to SLURM queue.");
        submit_batch_job(generated, args)
    } else {
        output::print_debug("Running terachem directly.");
        run_terachem(generated, args)
    }
}

/// 由站点选项与合成关键词构建 Slurm 配置
pub fn slurm_config(generated: &GeneratedInput, args: &LaunchArgs) -> SlurmConfig {
    let mut config = SlurmConfig::for_calc_type(generated.selection.calc_type);
    config.queue = args.slurm_queue.clone();
    config.partition = args.slurm_partition.clone();
    config.module = args.terachem_module.clone();
    if let Some(gpus) = generated.keywords.get("gpus") {
        config.gpus = gpus.clone();
    }
    config
}

/// 在工作目录写出提交脚本
pub fn write_batch_script(generated: &GeneratedInput, args: &LaunchArgs) -> Result<PathBuf> {
    let config = slurm_config(generated, args);
    let script = generate_sbatch_script(&config, generated.selection.calc_type);
    let path = generated.workdir.join(BATCH_SCRIPT_NAME);

    let to_error = |e: std::io::Error| AutoQuantumError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };
    let mut writer = BufWriter::new(File::create(&path).map_err(to_error)?);
    writer.write_all(script.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    Ok(path)
}

fn submit_batch_job(generated: &GeneratedInput, args: &LaunchArgs) -> Result<()> {
    let script_path = write_batch_script(generated, args)?;
    output::print_info(&format!("Wrote batch script {}", script_path.display()));

    shell::check_program("sbatch");
    let stdout = shell::run_shell(&format!("sbatch {}", BATCH_SCRIPT_NAME), &generated.workdir)?;
    output::print_success(&format!("Submitted: {}", stdout.trim()));
    Ok(())
}

fn run_terachem(generated: &GeneratedInput, args: &LaunchArgs) -> Result<()> {
    let calc_type = generated.selection.calc_type;

    // `module list` 不含 TeraChem 时先加载模块
    let module_list = shell::capture_shell("module list");
    let mut cmd = String::new();
    if module_list.to_lowercase().contains("terachem") {
        shell::check_program("terachem");
    } else {
        cmd.push_str(&format!("module load {}; ", args.terachem_module));
    }
    cmd.push_str(&terachem_command(calc_type));

    let pb = progress::create_spinner(&format!("Running TeraChem ({})", calc_type));
    let result = shell::run_shell(&cmd, &generated.workdir);
    pb.finish_and_clear();
    result?;

    output::print_success(&format!(
        "TeraChem finished; output in {}",
        generated.workdir.join(calc_type.stdout_filename()).display()
    ));
    Ok(())
}
