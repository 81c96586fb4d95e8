use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Embed the build wall clock as "HH:MM:SS" unless one was provided
    // (lets reproducible builds pin the seed).
    let build_time = match env::var("LITCLOAK_BUILD_TIME") {
        Ok(ts) if !ts.is_empty() => ts,
        _ => {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs();
            let day = secs % 86_400;
            format!("{:02}:{:02}:{:02}", day / 3600, (day % 3600) / 60, day % 60)
        }
    };

    println!("cargo:rustc-env=LITCLOAK_BUILD_TIME={}", build_time);
    println!("cargo:rerun-if-env-changed=LITCLOAK_BUILD_TIME");
    println!("cargo:rerun-if-changed=build.rs");
}
