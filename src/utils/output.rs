//! # 美化输出工具
//!
//! 提供统一的终端输出样式。`[DEBUG]` 消息仅在 `--debug` 时打印。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored`, `tabled` crate

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// 打开或关闭调试输出
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// 调试输出是否打开
pub fn debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印调试消息
pub fn print_debug(msg: &str) {
    if debug_enabled() {
        println!("{} {}", "[DEBUG]".magenta(), msg.dimmed());
    }
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印命令行用法
pub fn print_usage(text: &str) {
    print_header("AutoQuantum with TeraChem");
    println!("{}\n", text);
}

/// 调试模式下以表格打印
pub fn print_debug_table<T: tabled::Tabled>(title: &str, rows: &[T]) {
    if debug_enabled() && !rows.is_empty() {
        print_header(title);
        println!("{}", tabled::Table::new(rows));
    }
}
