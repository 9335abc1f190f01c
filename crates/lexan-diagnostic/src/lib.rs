//! Diagnostic and error reporting for Lexan.
//! Lexan 的诊断和错误报告。
//!
//! This crate renders lexer failures as annotated source snippets using ariadne.
//! 本 crate 使用 ariadne 库将词法错误渲染为带标注的源码片段。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, Label, Severity};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};
use std::io;

/// Build the ariadne report for a diagnostic.
/// 为诊断信息构建 ariadne 报告。
fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'static, (&'a str, std::ops::Range<usize>)> {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, usize::from(diagnostic.span.start))
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let color = colors.next();
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(color);
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    build_report(filename, diagnostic, true).eprint((filename, Source::from(source)))
}

/// Render a diagnostic to a plain (uncolored) string.
/// 将诊断信息渲染为不带颜色的字符串。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<String> {
    let mut buf = Vec::new();
    build_report(filename, diagnostic, false).write((filename, Source::from(source)), &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
