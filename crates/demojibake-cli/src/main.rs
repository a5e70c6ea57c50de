use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use demojibake_core::{repair_and_write, write_report_json, InvalidBytes, RepairOptions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "demojibake", version, about = "目录树乱码（mojibake）就地修复工具")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 遍历目录树并就地修复双重编码乱码
    Fix {
        /// 根目录（默认当前工作目录）
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// 试运行：只报告将要修复的文件，不回写
        #[arg(long)]
        dry_run: bool,

        /// 非法 UTF-8 字节的处理策略：drop（剔除）/ preserve（整文件跳过）/ fail（中止）
        #[arg(long, default_value = "drop", value_parser = ["drop", "preserve", "fail"])]
        on_invalid: String,

        /// JSON 报告输出文件（可选；记录每个被修复文件及其替换次数）
        #[arg(long)]
        report: Option<PathBuf>,

        /// 最大处理文件大小（单位字节，例如 5242880 代表 5MB）
        #[arg(long)]
        max_file_size: Option<u64>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fix { root, dry_run, on_invalid, report, max_file_size } => {
            info!(?root, dry_run, "starting repair");

            let opts = RepairOptions {
                invalid_bytes: parse_on_invalid(&on_invalid),
                dry_run,
                max_file_size,
            };

            // 逐行报告写标准输出；日志走标准错误，互不干扰
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let summary = repair_and_write(&root, &mut out, &opts).context("repair failed")?;
            out.flush().ok();

            // 可选的 JSON 报告（以缓冲方式写出）
            if let Some(path) = report {
                let mut w = BufWriter::new(File::create(&path).context("create report file")?);
                write_report_json(&mut w, &summary.fixed)?;
                w.flush().ok();
            }

            info!(
                files_scanned = summary.stats.files_scanned,
                files_fixed = summary.stats.files_fixed,
                files_skipped = summary.stats.files_skipped,
                replacements = summary.stats.replacements_total,
                "repair finished"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    // 日志一律写标准错误，标准输出只保留逐行修复报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析 on-invalid 参数
fn parse_on_invalid(s: &str) -> InvalidBytes {
    match s {
        "preserve" => InvalidBytes::Preserve,
        "fail" => InvalidBytes::Fail,
        _ => InvalidBytes::Drop,
    }
}
