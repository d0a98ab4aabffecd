use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");

    let version_string = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(_) if is_tagged_release(version) => version.to_owned(),
        Some(hash) => with_build_metadata(version, &hash),
        None => with_build_metadata(version, "unknown"),
    };

    println!("cargo:rustc-env=TIDYROOT_VERSION={version_string}");
}

fn with_build_metadata(version: &str, hash: &str) -> String {
    let build_date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!("{version}+{hash}.{build_date}")
}

fn is_tagged_release(version: &str) -> bool {
    let expected_tag = format!("tidyroot@v{version}");

    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|line| line.trim() == expected_tag))
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8(output.stdout)
        .ok()
        .map(|stdout| stdout.trim().to_owned())
}
