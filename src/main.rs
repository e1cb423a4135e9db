//! # Bitnet API 发布工具
//!
//! bitnet-api 包的发布入口，提供完整的发布流程：
//!
//! ## 主要步骤
//! 1. 更新 Cargo.toml 中的版本号
//! 2. 清理旧的打包产物
//! 3. 构建并校验新的分发包（cargo package）
//! 4. 上传到 crates.io（cargo publish）
//!
//! ## 使用方法
//! ```text
//! bitnet-release [major|minor|patch] [--no-confirm] [--dry-run]
//! ```
//!
//! ## 参数
//! - `major|minor|patch`: 指定要增加的版本部分
//! - `--no-confirm`: 跳过确认步骤
//! - `--dry-run`: 执行 cargo publish --dry-run，不真正上传

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bitnet_api::release::{
    cargo_package, cargo_publish, clean_artifacts, manifest_version, set_manifest_version, BumpPart,
};

/// Release tool for the bitnet-api package
#[derive(Debug, Parser)]
#[command(
    name = "bitnet-release",
    version,
    about = "Bump the package version and publish to the registry"
)]
struct Cli {
    /// Version part to increase
    #[arg(value_enum)]
    part: BumpPart,

    /// Skip the interactive confirmations
    #[arg(long)]
    no_confirm: bool,

    /// Rehearse the upload without publishing
    #[arg(long)]
    dry_run: bool,

    /// Manifest to operate on
    #[arg(long, value_name = "PATH", default_value = "Cargo.toml")]
    manifest: PathBuf,

    /// Target directory holding package artifacts
    #[arg(long, value_name = "PATH", default_value = "target")]
    target_dir: PathBuf,
}

/// Ask a y/n question on stdin
fn confirm(question: &str) -> Result<bool> {
    print!("{} (y/n): ", question.yellow());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn main() -> Result<()> {
    // Initialize tracing - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    let current = manifest_version(&cli.manifest)?;
    let next = current.bumped(cli.part);

    println!("{}", format!("Current version: {}", current).yellow());
    println!("{}", format!("New version:     {}", next).green());

    if !cli.no_confirm && !confirm("Bump the version and start the release?")? {
        println!("{}", "Release cancelled".red());
        return Ok(());
    }

    set_manifest_version(&cli.manifest, &next)?;
    println!("{}", format!("Version updated to {}", next).green());

    println!("{}", "Cleaning old package artifacts...".blue());
    clean_artifacts(&cli.target_dir)?;

    println!("{}", "Building the package...".blue());
    cargo_package()?;
    println!("{}", "Package check passed!".green());

    let destination = if cli.dry_run {
        "the registry (dry run)"
    } else {
        "crates.io"
    };

    if !cli.no_confirm && !confirm(&format!("Upload to {}?", destination))? {
        println!("{}", "Upload cancelled".red());
        return Ok(());
    }

    println!("{}", format!("Publishing to {}...", destination).blue());
    let output = cargo_publish(cli.dry_run)?;

    println!("{}", "Publish finished!".green());
    if let Some(line) = output.lines().find(|line| line.contains("Uploading")) {
        println!("{}", line.trim().yellow());
    }

    Ok(())
}
