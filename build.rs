fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Path the site is hosted under, e.g. "/portfolio/" on a project page
    let base_path = std::env::var("SITE_BASE_PATH").unwrap_or_else(|_| "/".to_string());
    println!("cargo:rustc-env=SITE_BASE_PATH={}", base_path);

    println!("cargo:rerun-if-env-changed=SITE_BASE_PATH");
    println!("cargo:rerun-if-changed=build.rs");
}
