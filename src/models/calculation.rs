//! # TeraChem 计算类型
//!
//! 四种互斥的计算类型，以及由类型唯一决定的输入/输出文件名。
//!
//! ## 依赖关系
//! - 被 `keywords/selector.rs`, `keywords/defaults.rs` 使用
//! - 被 `commands/` 和 `utils/slurm.rs` 使用

/// 计算类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcType {
    /// 单点能 (`--spe`)
    SinglePointEnergy,
    /// 几何优化 (`--opt`)
    Optimization,
    /// 振动频率 (`--freq`)
    Frequencies,
    /// 从头算分子动力学 (`--bomd`)
    MolecularDynamics,
}

impl CalcType {
    /// 选择器的扫描顺序，同时传入多个类型时报错信息按此顺序列出
    pub const SCAN_ORDER: [CalcType; 4] = [
        CalcType::SinglePointEnergy,
        CalcType::Optimization,
        CalcType::Frequencies,
        CalcType::MolecularDynamics,
    ];

    /// 命令行上选择该类型的裸标志名
    pub fn flag(&self) -> &'static str {
        match self {
            CalcType::SinglePointEnergy => "spe",
            CalcType::Optimization => "opt",
            CalcType::Frequencies => "freq",
            CalcType::MolecularDynamics => "bomd",
        }
    }

    /// 作业名中使用的大写标签
    pub fn label(&self) -> &'static str {
        match self {
            CalcType::SinglePointEnergy => "SPE",
            CalcType::Optimization => "OPT",
            CalcType::Frequencies => "FREQ",
            CalcType::MolecularDynamics => "BOMD",
        }
    }

    /// TeraChem 输入文件名
    pub fn input_filename(&self) -> String {
        format!("tc_{}.in", self.flag())
    }

    /// 标准输出文件名
    pub fn stdout_filename(&self) -> String {
        format!("tc_{}.out", self.flag())
    }

    /// 标准错误文件名
    pub fn stderr_filename(&self) -> String {
        format!("tc_{}.err", self.flag())
    }
}

impl std::fmt::Display for CalcType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcType::SinglePointEnergy => write!(f, "single-point energy"),
            CalcType::Optimization => write!(f, "geometry optimization"),
            CalcType::Frequencies => write!(f, "vibrational frequencies"),
            CalcType::MolecularDynamics => write!(f, "BOMD molecular dynamics"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_names() {
        let t = CalcType::Frequencies;
        assert_eq!(t.input_filename(), "tc_freq.in");
        assert_eq!(t.stdout_filename(), "tc_freq.out");
        assert_eq!(t.stderr_filename(), "tc_freq.err");
        assert_eq!(CalcType::MolecularDynamics.input_filename(), "tc_bomd.in");
    }

    #[test]
    fn test_scan_order_flags() {
        let flags: Vec<_> = CalcType::SCAN_ORDER.iter().map(|t| t.flag()).collect();
        assert_eq!(flags, vec!["spe", "opt", "freq", "bomd"]);
    }
}
