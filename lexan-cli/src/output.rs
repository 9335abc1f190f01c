//! Status messages for the CLI.
//! CLI 的状态消息输出。
//!
//! Success and warning lines are suppressed by `--quiet`; errors never are.
//! `--quiet` 会屏蔽成功和警告消息，但不会屏蔽错误。

use lexan_diagnostic::{Diagnostic, emit};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable or disable quiet mode.
/// 启用或关闭安静模式。
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("\x1b[32m{msg}\x1b[0m");
    }
}

/// Print a warning message in yellow.
/// 以黄色打印警告消息。
pub fn warning(msg: &str) {
    if !is_quiet() {
        eprintln!("\x1b[33mwarning:\x1b[0m {msg}");
    }
}

/// Render a non-fatal diagnostic unless quiet. Returns whether it was shown.
/// 非安静模式下渲染非致命诊断，返回是否已输出。
pub fn diagnostic(source: &str, name: &str, diagnostic: &Diagnostic) -> bool {
    if is_quiet() {
        return false;
    }
    if let Err(e) = emit(source, name, diagnostic) {
        tracing::warn!(%e, "cannot render diagnostic");
    }
    true
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}
