use std::env;
use std::fs;
use std::path::Path;

const FORWARDED: [&str; 2] = ["BASE_URL", "LOG_LEVEL"];

fn main() {
    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={key}");
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=could not read .env, using defaults");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        // the process environment wins over .env
        if FORWARDED.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
        }
    }
}
