use std::{env, fs, path::PathBuf};

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap_or_default();
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo always sets OUT_DIR"));

    let memory_file = if target.starts_with("thumbv8m") {
        // Pico 2 ARM
        Some("memory-pico2.x")
    } else if target.starts_with("thumbv6m") {
        // Pico 1
        Some("memory-pico1.x")
    } else {
        // Host builds (feature "host") need no linker script
        None
    };

    if let Some(memory_file) = memory_file {
        let memory_x = fs::read_to_string(memory_file)
            .unwrap_or_else(|err| panic!("Failed to read {memory_file}: {err}"));
        fs::write(out_dir.join("memory.x"), memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={memory_file}");
    }

    // 2) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");

    // 3) Game settings with fallbacks so a bare checkout builds
    let passing_score = env_or_default("REFLEX_PASSING_SCORE", "20");
    let max_current_ma = env_or_default("REFLEX_MAX_CURRENT_MA", "500");

    if passing_score.parse::<i32>().is_err() {
        println!(
            "cargo:warning=REFLEX_PASSING_SCORE={passing_score} is not an integer; the build will fail"
        );
    }
    if max_current_ma.parse::<u32>().is_err() {
        println!(
            "cargo:warning=REFLEX_MAX_CURRENT_MA={max_current_ma} is not an integer; the build will fail"
        );
    }

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=REFLEX_PASSING_SCORE={passing_score}");
    println!("cargo:rustc-env=REFLEX_MAX_CURRENT_MA={max_current_ma}");

    println!("cargo:rerun-if-env-changed=REFLEX_PASSING_SCORE");
    println!("cargo:rerun-if-env-changed=REFLEX_MAX_CURRENT_MA");
    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let _ = dotenvy::from_path(home.join(file));
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
