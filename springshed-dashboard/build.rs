use std::env;
use std::fs;
use std::path::Path;

/// Used when `fixtures/remote.json` is absent.
const DEFAULT_REMOTE_JSON: &str =
    "{\"databaseURL\": \"https://springjal-66c38-default-rtdb.firebaseio.com/\"}\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("remote.json");

    // Copy the remote store config to OUT_DIR for include_str. It carries
    // only the database URL (and optionally a token), never a service
    // account key.
    let remote_src = Path::new("../fixtures/remote.json");
    if remote_src.exists() {
        fs::copy(remote_src, &dest).unwrap();
    } else {
        fs::write(&dest, DEFAULT_REMOTE_JSON).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/remote.json");
}
