//! # 外部命令工具
//!
//! 通过 `sh -c` 运行命令（需要 `module` 等 shell 函数），
//! 检查程序是否在 PATH 中，读取主机名。
//!
//! ## 依赖关系
//! - 被 `commands/launch.rs` 使用
//! - 使用 `which`, `hostname` crate

use crate::error::{AutoQuantumError, Result};
use crate::utils::output;

use std::path::Path;
use std::process::Command;

/// 在指定目录运行 shell 命令，成功时返回标准输出
pub fn run_shell(cmd: &str, dir: &Path) -> Result<String> {
    output::print_debug(&format!("[{}] sh -c '{}'", dir.display(), cmd));

    let out = Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .current_dir(dir)
        .output()
        .map_err(|e| AutoQuantumError::CommandSpawnError {
            command: cmd.to_string(),
            source: e,
        })?;

    if !out.status.success() {
        return Err(AutoQuantumError::CommandFailed {
            command: cmd.to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

/// 运行命令并合并标准输出与标准错误；任何失败都返回空字符串
///
/// `module list` 把结果写到标准错误。
pub fn capture_shell(cmd: &str) -> String {
    match Command::new("sh").arg("-c").arg(cmd).output() {
        Ok(out) => {
            let mut text = String::from_utf8_lossy(&out.stdout).to_string();
            text.push_str(&String::from_utf8_lossy(&out.stderr));
            text
        }
        Err(e) => {
            output::print_debug(&format!("'{}' could not be run: {}", cmd, e));
            String::new()
        }
    }
}

/// 程序是否在 PATH 中；缺失时打印警告
pub fn check_program(program: &str) -> bool {
    match which::which(program) {
        Ok(path) => {
            output::print_debug(&format!("Found {} at {}", program, path.display()));
            true
        }
        Err(_) => {
            output::print_warning(&format!("Missing program: {}", program));
            false
        }
    }
}

/// 当前主机名，读取失败时为空字符串
pub fn host_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_default()
}
