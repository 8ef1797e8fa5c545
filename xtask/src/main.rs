//! Custom cargo commands for the osa-distance crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and minimal features)
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask kani      - Run Kani model checking proofs
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["osa_differential", "batch_order", "dynamic_values"];

/// Seconds per fuzz target in `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + contract markers)
  test      Run all Rust tests, with default and with no features
  check     Quick check (cargo test + clippy)
  fuzz      Run every fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
  kani      Run Kani proofs (needs cargo-kani)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("osa-distance Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract checks wired into the engine\n");

    println!("[2/3] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, including the sequential-only build
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Short fuzzing pass over every target
fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        run_cargo_in(&root, &["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    Ok(())
}

/// Kani proofs live in a standalone crate
fn kani() -> Result<()> {
    let dir = project_root()?.join("kani-proofs");
    run_cargo_in(&dir, &["kani"])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every result-producing module must call into `contracts`.
fn check_contract_markers() -> Result<()> {
    let src = project_root()?.join("src");
    let required = [
        ("osa/engine.rs", "check_distance_bounds"),
        ("normalize.rs", "check_normalized_range"),
        ("batch.rs", "check_batch_shape"),
    ];

    for (file, marker) in required {
        let path = src.join(file);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if !content.contains(marker) {
            bail!("{} no longer calls {}", file, marker);
        }
    }
    Ok(())
}
