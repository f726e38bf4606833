fn main() {
    // rebuild metadata (git hash, build date) used by the --version string
    built::write_built_file().expect("Failed to acquire build-time information");
}
