fn main() {
    println!("cargo:rerun-if-env-changed=API_BASE_URL");

    // Browser builds have no process environment, so the API URL is baked in at compile time
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    if let Ok(url) = std::env::var("API_BASE_URL") {
        println!("cargo:rustc-env=API_BASE_URL={}", url);
    }
}
