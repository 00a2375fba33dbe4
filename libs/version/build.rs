use std::process::Command;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=FLORA_RUSTC_VERSION={version}");

    for var in [
        "FLORA_GIT_VERSION",
        "FLORA_GIT_COMMIT",
        "FLORA_GIT_TREE_STATE",
        "FLORA_BUILD_DATE",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
