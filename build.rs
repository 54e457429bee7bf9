use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=AVERAGECOLOR_VERSION");

    let version = match std::env::var("AVERAGECOLOR_VERSION") {
        Ok(v) => v,
        Err(_) => match Command::new("git").args(["describe", "--tags"]).output() {
            Ok(o) if o.status.success() => String::from_utf8_lossy(&o.stdout).trim().to_string(),
            _ => std::env::var("CARGO_PKG_VERSION").unwrap_or_default(),
        },
    };

    let version = version.strip_prefix('v').unwrap_or(&version);
    println!("cargo:rustc-env=AVERAGECOLOR_VERSION={version}");
}
