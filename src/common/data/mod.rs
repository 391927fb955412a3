use std::{env, fs, path::PathBuf};

use crate::common::grid::Grid;

const TEST_MAPS_DIRNAME: &str = "test_maps";

/// Loads a text grid fixture from `src/common/data/test_maps`.
pub fn load_test_map(map_name: &str) -> Grid {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let map_path = PathBuf::from(manifest_dir)
        .join("src")
        .join("common")
        .join("data")
        .join(TEST_MAPS_DIRNAME)
        .join(map_name);
    let text = fs::read_to_string(&map_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", map_path.display()));

    text.parse()
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", map_path.display()))
}
