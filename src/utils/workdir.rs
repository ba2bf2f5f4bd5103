//! # 工作目录工具
//!
//! 创建带编号的新工作目录（`AutoQuantum.0001`, `AutoQuantum.0002`, ...），
//! 并把输入中引用到的文件复制进去。
//!
//! ## 依赖关系
//! - 被 `commands/input.rs` 使用
//! - 使用 `utils/output.rs`

use crate::error::{AutoQuantumError, Result};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 编号的零填充位数
pub const COUNTER_WIDTH: usize = 4;

/// 编号目录路径 `<base>.<n>`
pub fn numbered_dir(base: &Path, n: usize, width: usize) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{:0width$}", n, width = width));
    PathBuf::from(name)
}

/// 从 1 开始找到第一个未被占用的编号并创建目录
pub fn create_numbered_dir(base: &Path, width: usize) -> Result<PathBuf> {
    let mut n = 1;
    let mut dir = numbered_dir(base, n, width);
    while dir.exists() {
        n += 1;
        dir = numbered_dir(base, n, width);
    }

    fs::create_dir(&dir).map_err(|e| AutoQuantumError::DirectoryCreateError {
        path: dir.display().to_string(),
        source: e,
    })?;

    Ok(dir)
}

/// 把文件复制到目录中（保留文件名）
///
/// 源文件不存在只给出警告；存在但复制失败则返回错误。
/// 返回是否实际复制。
pub fn copy_into(src: &Path, dir: &Path) -> Result<bool> {
    if !src.is_file() {
        output::print_warning(&format!(
            "Input file '{}' not found, not copied to {}",
            src.display(),
            dir.display()
        ));
        return Ok(false);
    }

    let Some(file_name) = src.file_name() else {
        return Ok(false);
    };
    let dest = dir.join(file_name);

    fs::copy(src, &dest).map_err(|e| AutoQuantumError::FileCopyError {
        from: src.display().to_string(),
        to: dest.display().to_string(),
        source: e,
    })?;

    output::print_debug(&format!("Copied {} -> {}", src.display(), dest.display()));
    Ok(true)
}
