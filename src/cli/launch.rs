//! # 作业启动选项
//!
//! Slurm 提交与直接运行 TeraChem 时使用的站点配置。
//! 每个选项都可以通过 `AUTOQUANTUM_*` 环境变量提供。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/input.rs`, `commands/launch.rs`

use clap::Args;

/// 作业启动选项（必须出现在第一个关键词标志之前）
#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    // ─────────────────────────────────────────────────────────────
    // Slurm options
    // ─────────────────────────────────────────────────────────────
    /// Slurm QOS/queue for GPU jobs
    #[arg(long, env = "AUTOQUANTUM_SLURM_QUEUE", default_value = "gpu")]
    pub slurm_queue: String,

    /// Slurm partition for GPU jobs
    #[arg(long, env = "AUTOQUANTUM_SLURM_PARTITION", default_value = "gpu")]
    pub slurm_partition: String,

    /// Regex matched against the host name; a match submits to Slurm instead of running directly
    #[arg(long, env = "AUTOQUANTUM_BATCH_HOST", default_value = "warrior")]
    pub batch_host: String,

    // ─────────────────────────────────────────────────────────────
    // TeraChem options
    // ─────────────────────────────────────────────────────────────
    /// Environment module providing TeraChem
    #[arg(long, env = "AUTOQUANTUM_TERACHEM_MODULE", default_value = "terachem")]
    pub terachem_module: String,

    /// Base name of the numbered working directory (<base>.0001, <base>.0002, ...)
    #[arg(long, env = "AUTOQUANTUM_WORKDIR_BASE", default_value = "AutoQuantum")]
    pub workdir_base: String,
}

impl Default for LaunchArgs {
    fn default() -> Self {
        LaunchArgs {
            slurm_queue: "gpu".to_string(),
            slurm_partition: "gpu".to_string(),
            batch_host: "warrior".to_string(),
            terachem_module: "terachem".to_string(),
            workdir_base: "AutoQuantum".to_string(),
        }
    }
}
