use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=NXVET_LOG_LEVEL");
    println!("cargo:rerun-if-env-changed=NXVET_TERMS_URL");
    println!("cargo:rerun-if-env-changed=NXVET_PRIVACY_URL");

    let sha = git(&["rev-parse", "--short=7", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    let dirty = git(&["status", "--porcelain"]).is_some();

    println!("cargo:rustc-env=NXVET_WEB_GIT_SHA={sha}");
    println!("cargo:rustc-env=NXVET_WEB_GIT_DIRTY={dirty}");
}
