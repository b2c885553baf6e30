use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();
    let _profile = env::var("PROFILE").unwrap();

    // Copy config.toml and the path file to the build output directory
    let dest_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();

    fs::copy("config.toml", dest_dir.join("config.toml")).unwrap();
    fs::copy("shieldpath.json", dest_dir.join("shieldpath.json")).unwrap();
}
