fn main() {
    // Stamp the build time into the binary for the report's createdAt field.
    // Format matches a human-readable "Mon DD YYYY HH:MM:SS" timestamp.
    let stamp = chrono::Utc::now().format("%b %e %Y %H:%M:%S").to_string();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={stamp}");
}
