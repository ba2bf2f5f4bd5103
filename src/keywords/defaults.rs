//! # TeraChem 默认关键词表
//!
//! 与 TeraChem 期望的关键词词汇逐项对应，不要随意修改取值。

use crate::models::CalcType;

/// 关键词默认值表
pub type DefaultTable = &'static [(&'static str, &'static str)];

/// 所有计算类型共用的默认值
pub const UNIVERSAL: DefaultTable = &[
    ("coordinates", "input.xyz"),
    ("charge", "0"),
    ("spinmult", "1"),
    ("basis", "6-31gss"),
    ("method", "b3lyp"),
    ("convthre", "1e-7"),
    ("threall", "1e-14"),
    ("precision", "mixed"),
    ("maxit", "200"),
    ("scf", "diis+a"),
    ("gpus", "1"),
    ("gpumem", "256"),
    ("scrdir", "scr/"),
];

pub const SINGLE_POINT: DefaultTable = &[("run", "energy")];

pub const OPTIMIZATION: DefaultTable = &[
    ("run", "minimize"),
    ("new_minimizer", "no"),
    ("min_coordinates", "cartesian"),
];

pub const FREQUENCIES: DefaultTable = &[("run", "frequencies"), ("mincheck", "false")];

pub const DYNAMICS: DefaultTable = &[
    ("run", "bomd"),
    ("nstep", "1000"),
    ("min_maxallowedstep", "5.0"),
    ("timestep", "1.0"),
    ("mdbc", "spherical"),
    ("orbitalswrtfrq", "100"),
];

/// CASSCF 扩展默认值，仅在 `--casscf` 时合并
pub const CASSCF: DefaultTable = &[
    ("casscf", "no"),
    ("alphacas", "yes"),
    ("alpha", "0.64"),
    ("castarget", "0"),
    ("castargetmult", "1"),
    ("cassinglets", "3"),
    ("casscfmacromaxiter", "0"),
    ("casscfmaxiter", "100"),
    ("casscftrustmaxiter", "0"),
    ("casscfmicroconvthre", "100.0"),
    ("casscfmacroconvthre", "100.0"),
    ("casscfconvthre", "1e-04"),
    ("casscfenergyconvthre", "1e-04"),
    ("cpsacasscfmaxiter", "100"),
    ("cpsacasscfconvthre", "0.001"),
    ("closed", "85"),
    ("active", "3"),
    ("casguess", "c0.casscf"),
    ("cascharges", "yes"),
    ("ci_solver", "explicit"),
];

/// 计算类型对应的默认值表
pub fn for_calc_type(calc_type: CalcType) -> DefaultTable {
    match calc_type {
        CalcType::SinglePointEnergy => SINGLE_POINT,
        CalcType::Optimization => OPTIMIZATION,
        CalcType::Frequencies => FREQUENCIES,
        CalcType::MolecularDynamics => DYNAMICS,
    }
}
