use std::process::Command;

fn main() {
    let now = time::OffsetDateTime::now_utc();
    let date_fmt = time::format_description::parse("[year]-[month]-[day]")
        .expect("valid date format");

    let date = std::env::var("BVH_BUILD_DATE")
        .unwrap_or_else(|_| now.format(&date_fmt).unwrap_or_else(|_| "unknown".to_string()));
    let revision = std::env::var("BVH_GIT_REVISION").unwrap_or_else(|_| git_describe());

    println!("cargo:rerun-if-env-changed=BVH_BUILD_DATE");
    println!("cargo:rerun-if-env-changed=BVH_GIT_REVISION");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rustc-env=BVH_BUILD_DATE={}", date);
    println!("cargo:rustc-env=BVH_GIT_REVISION={}", revision);
}

/// `git describe` of the source tree, "unknown" outside a checkout.
fn git_describe() -> String {
    Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
