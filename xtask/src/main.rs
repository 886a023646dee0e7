//! Custom cargo commands for the contract crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and all features)
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask check     - Quick check (no Kani, no fuzzing)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets defined in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["message_rendering", "check_outcomes"];

/// Seconds each fuzz target runs for under `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        Some("check") => check()?,
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
  verify    Run full verification suite (tests + clippy + templates + Kani)
  test      Run all Rust tests, default and all features
  kani      Run Kani proofs only
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (requires nightly + cargo-fuzz)
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Contract Crate Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Verifying template alignment with kani-proofs...");
    verify_templates()?;
    println!("✓ Templates aligned\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, with default features and with every feature
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--all-features"])
}

/// Run Kani proofs in the standalone crate
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani (is kani-verifier installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Run every fuzz target for a fixed time budget
fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, FUZZ_SECONDS);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(&root)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;

        if !status.success() {
            bail!("fuzz target {} found a failure", target);
        }
    }

    Ok(())
}

/// Quick check (no Kani, no fuzzing)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
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
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The panicking checks must keep their documented invariants block.
fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;
    let category = std::fs::read_to_string(root.join("src/category.rs"))
        .context("Failed to read src/category.rs")?;

    if let Some((file, marker)) = missing_marker(&contracts, &category) {
        bail!(
            "Expected {} marker in {}. Someone may have removed it!",
            marker,
            file
        );
    }

    Ok(())
}

/// First file missing its own marker. Each file is checked on its own.
fn missing_marker(contracts: &str, category: &str) -> Option<(&'static str, &'static str)> {
    [
        ("src/contracts.rs", contracts, "INVARIANTS"),
        ("src/category.rs", category, "INVARIANT:"),
    ]
    .into_iter()
    .find(|(_, content, marker)| !content.contains(*marker))
    .map(|(file, _, marker)| (file, marker))
}

/// The template strings in `src/category.rs` and `kani-proofs/src/lib.rs` must match.
fn verify_templates() -> Result<()> {
    let root = project_root()?;

    let crate_templates = extract_templates(&root.join("src/category.rs"))?;
    let proof_templates = extract_templates(&root.join("kani-proofs/src/lib.rs"))?;

    if crate_templates.len() != 5 {
        bail!(
            "Expected 5 templates in src/category.rs, found {}",
            crate_templates.len()
        );
    }

    if crate_templates != proof_templates {
        for (ours, theirs) in crate_templates.iter().zip(&proof_templates) {
            if ours != theirs {
                eprintln!("  crate:  {:?}\n  proofs: {:?}", ours, theirs);
            }
        }
        bail!("Templates in kani-proofs/src/lib.rs have drifted from src/category.rs");
    }

    Ok(())
}

/// Collect every string literal containing the `[{}]` slot, in file order.
fn extract_templates(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let templates = content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('"') && line.contains("[{}]"))
        .map(|line| line.trim_end_matches(',').to_string())
        .collect();

    Ok(templates)
}
