use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let commit_date =
        git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d"]).unwrap_or_default();

    // A release build is a clean tree sitting exactly on a version tag
    let version = env!("CARGO_PKG_VERSION");
    let dirty = git(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
    let tagged = git(&["tag", "--points-at", "HEAD"]).is_some_and(|tags| {
        tags.lines()
            .any(|tag| tag == version || tag == format!("v{}", version))
    });

    // "0.1.0" for releases, "0.1.0@abc1234 2024-01-15" for dev builds
    let full = if (tagged && !dirty) || hash.is_empty() {
        version.to_string()
    } else {
        format!("{}@{} {}", version, hash, commit_date)
    };
    println!("cargo:rustc-env=CALGRID_VERSION={}", full);
}
