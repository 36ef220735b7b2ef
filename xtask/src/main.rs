//! Build automation tasks for the reflex-grid firmware.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

/// Must match `[[bin]] name` in the root `Cargo.toml`.
const FIRMWARE: &str = "reflex_grid";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the reflex-grid firmware", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: build lib and firmware, run host tests, generate docs
    CheckAll,
    /// Build the library for a board
    Build {
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
    /// Build the firmware binary (Pico 1)
    Firmware {
        /// Loop back to the instructions after each result
        #[arg(long)]
        replay: bool,
    },
    /// Build a UF2 firmware file for flashing to the Pico 1
    Uf2 {
        #[arg(long)]
        replay: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    Pico1,
    Pico2,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pico1 => write!(f, "pico1"),
            Board::Pico2 => write!(f, "pico2"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pico1 => "thumbv6m-none-eabi",
            Board::Pico2 => "thumbv8m.main-none-eabihf",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { board } => build_lib(board),
        Commands::Firmware { replay } => {
            if build_firmware(replay, false) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Uf2 { replay } => build_uf2(replay),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    for board in [Board::Pico1, Board::Pico2] {
        let features = build_features(board, false);
        println!(
            "{}",
            format!("==> Building library ({board})...").cyan()
        );
        if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
            "build",
            "--lib",
            "--target",
            board.target(),
            "--features",
            &features,
            "--no-default-features",
        ])) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Building firmware (pico1)...".cyan());
    for replay in [false, true] {
        println!(
            "  {}",
            format!("- replay: {replay}").bright_black()
        );
        if !build_firmware(replay, false) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Running host tests...".cyan());
    let host_target = host_target();
    match host_target.as_deref() {
        Some(target) => {
            println!(
                "  {}",
                format!("Using host target: {target}").bright_black()
            );
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    let mut host_test_cmd = Command::new("cargo");
    host_test_cmd
        .current_dir(&workspace_root)
        .args(["test", "--lib", "--tests"]);

    if let Some(target) = host_target {
        host_test_cmd.arg("--target").arg(target);
    }

    host_test_cmd.args(["--no-default-features", "--features", "host"]);

    if !run_command(&mut host_test_cmd) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--target",
        Board::Pico1.target(),
        "--no-deps",
        "--features",
        &build_features(Board::Pico1, false),
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_lib(board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    let features = build_features(board, false);
    println!(
        "{}",
        format!("Building library with features: {features}").cyan()
    );

    if run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--target",
        board.target(),
        "--features",
        &features,
        "--no-default-features",
    ])) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// The firmware binary is declared with `required-features = ["pico1"]`.
fn build_firmware(replay: bool, release: bool) -> bool {
    let workspace_root = workspace_root();
    let board = Board::Pico1;
    let features = build_features(board, replay);
    println!(
        "{}",
        format!("Building firmware '{FIRMWARE}' with features: {features}").cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root)
        .args(["build", "--bin", FIRMWARE, "--target", board.target()])
        .args(["--features", &features, "--no-default-features"]);
    if release {
        cmd.arg("--release");
    }

    let ok = run_command(&mut cmd);
    if ok {
        println!("{}", "Build successful!".green());
    }
    ok
}

fn build_uf2(replay: bool) -> ExitCode {
    let workspace_root = workspace_root();
    let target = Board::Pico1.target();

    println!("{}", format!("Building UF2 for '{FIRMWARE}'").cyan());
    println!("  Target: {}", target.bright_black());

    // Build in release mode for UF2
    if !build_firmware(replay, true) {
        return ExitCode::FAILURE;
    }

    // Convert to UF2 using elf2uf2-rs
    let elf_path = format!("target/{target}/release/{FIRMWARE}");
    let uf2_path = format!("{FIRMWARE}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(&workspace_root)
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

fn build_features(board: Board, replay: bool) -> String {
    let mut features = vec![board.to_string(), "arm".to_string(), "defmt".to_string()];
    if replay {
        features.push("replay".to_string());
    }
    features.join(",")
}

fn workspace_root() -> std::path::PathBuf {
    // `cargo xtask` runs from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if let Some(host) = line.strip_prefix("host: ") {
            return Some(host.trim().to_string());
        }
    }
    None
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
