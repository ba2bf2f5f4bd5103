//! # Slurm 脚本生成工具
//!
//! 生成 TeraChem GPU 作业的 sbatch 提交脚本。
//! 脚本把工作目录复制到节点本地 `/tmp/` 运行，结束后再复制回提交目录。
//!
//! ## 依赖关系
//! - 被 `commands/launch.rs` 使用
//! - 使用 `models/calculation.rs` 派生文件名

use crate::models::CalcType;

/// 提交脚本文件名
pub const BATCH_SCRIPT_NAME: &str = "AutoQuantum_TC_Job.sh";

/// Slurm 作业配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlurmConfig {
    pub job_name: String,
    pub queue: String,
    pub partition: String,
    pub nodes: u32,
    pub ntasks: u32,
    pub gpus: String,
    pub mem: String,
    pub time_limit: String,
    pub module: String,
}

impl Default for SlurmConfig {
    fn default() -> Self {
        SlurmConfig {
            job_name: "AutoQuantum_TC".to_string(),
            queue: "gpu".to_string(),
            partition: "gpu".to_string(),
            nodes: 1,
            ntasks: 3,
            gpus: "1".to_string(),
            mem: "20GB".to_string(),
            time_limit: "120:00:00".to_string(),
            module: "terachem".to_string(),
        }
    }
}

impl SlurmConfig {
    /// 以计算类型命名作业
    pub fn for_calc_type(calc_type: CalcType) -> Self {
        SlurmConfig {
            job_name: format!("AutoQuantum_TC_{}", calc_type.label()),
            ..SlurmConfig::default()
        }
    }
}

/// TeraChem 运行命令（含标准输出/错误重定向）
pub fn terachem_command(calc_type: CalcType) -> String {
    format!(
        "terachem -i {} 1> {} 2> {}",
        calc_type.input_filename(),
        calc_type.stdout_filename(),
        calc_type.stderr_filename()
    )
}

/// 生成 sbatch 脚本内容
pub fn generate_sbatch_script(config: &SlurmConfig, calc_type: CalcType) -> String {
    format!(
        r#"#!/bin/bash
#SBATCH -t {}
#SBATCH -q {}
#SBATCH -p {}
#SBATCH -N {}
#SBATCH -n {}
#SBATCH -o slurm_{}
#SBATCH -e slurm_{}
#SBATCH --job-name {}
#SBATCH --gres=gpu:{}
#SBATCH --mem={}

module load {}
cp ./* /tmp/
cd /tmp/
{}
cp -r ./* $SLURM_SUBMIT_DIR/

"#,
        config.time_limit,
        config.queue,
        config.partition,
        config.nodes,
        config.ntasks,
        calc_type.stdout_filename(),
        calc_type.stderr_filename(),
        config.job_name,
        config.gpus,
        config.mem,
        config.module,
        terachem_command(calc_type),
    )
}
