//! Lexan CLI - The Lexan lexical analyzer command line interface.
//! Lexan CLI - Lexan 词法分析器的命令行界面。

mod commands;
mod output;
mod render;

use clap::{Args, Parser, Subcommand};
use render::{OutputFormat, RenderConfig};
use tracing_subscriber::EnvFilter;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "lexan")]
#[command(author, version, about = "Lexan - A lexical analyzer for a small C/JS-like language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a file. / 打印文件的 token。
    Tokens {
        /// The file to tokenize. / 要分析的文件。
        file: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the tokens of source text. / 打印源文本的 token。
    Expr {
        /// The source text to tokenize. / 要分析的源文本。
        source: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Check that a file tokenizes. / 检查文件能否通过词法分析。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },
}

/// Token rendering options.
/// Token 渲染选项。
#[derive(Args)]
struct RenderArgs {
    /// Output format. / 输出格式。
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Hide NEWLINE tokens. / 隐藏 NEWLINE token。
    #[arg(long)]
    no_newlines: bool,

    /// Show canonical operator names. / 显示运算符的规范名称。
    #[arg(long)]
    operator_names: bool,
}

impl RenderArgs {
    fn config(&self) -> RenderConfig {
        RenderConfig::new()
            .format(self.format)
            .show_newlines(!self.no_newlines)
            .show_operator_names(self.operator_names)
    }
}

/// Install the log subscriber. `RUST_LOG` overrides `--verbose`.
/// 安装日志订阅器。`RUST_LOG` 优先于 `--verbose`。
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    output::set_quiet(cli.quiet);

    let result = match &cli.command {
        Commands::Tokens { file, render } => commands::tokens::run(file, &render.config()),
        Commands::Expr { source, render } => commands::expr::run(source, &render.config()),
        Commands::Check { file } => commands::check::run(file, cli.verbose),
    };

    if let Err(e) = result {
        output::error(&e);
        std::process::exit(1);
    }
}
