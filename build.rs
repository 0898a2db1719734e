use std::env;
use std::fs;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/frozen.rs"]
mod frozen;

#[allow(dead_code)]
#[path = "src/ranks.rs"]
mod ranks;

/// (constant name, rank file looked up in TOKEN_EXPLORER_MODELS)
const ENCODINGS: &[(&str, &str)] = &[
    ("P50K_BASE", "p50k_base.tiktoken"),
    ("R50K_BASE", "r50k_base.tiktoken"),
];

fn main() {
    println!("cargo:rerun-if-env-changed=TOKEN_EXPLORER_MODELS");
    println!("cargo:rerun-if-changed=src/frozen.rs");
    println!("cargo:rerun-if-changed=src/ranks.rs");

    let out_dir = env::var("OUT_DIR").unwrap();
    build_frozen_models(&out_dir);
}

fn build_frozen_models(out_dir: &str) {
    let models_dir = env::var("TOKEN_EXPLORER_MODELS").ok();

    let out = Path::new(out_dir);
    let mut codegen = String::new();

    for &(const_name, file_name) in ENCODINGS {
        let rank_path = models_dir.as_ref().map(|dir| Path::new(dir).join(file_name));
        match rank_path {
            Some(path) if path.exists() => {
                println!("cargo:rerun-if-changed={}", path.display());
                let blob = build_tiktoken_frozen(&path);
                let filename = format!("{}_frozen.bin", const_name.to_lowercase());
                let dest = out.join(&filename);
                fs::write(&dest, &blob)
                    .unwrap_or_else(|e| panic!("Failed to write {}: {}", filename, e));
                codegen.push_str(&format!(
                    "pub const {}: Option<&[u8]> = Some(include_bytes!({:?}));\n",
                    const_name,
                    dest.display().to_string()
                ));
            }
            _ => {
                codegen.push_str(&format!("pub const {}: Option<&[u8]> = None;\n", const_name));
            }
        }
    }

    let dest = out.join("embedded_models.rs");
    fs::write(&dest, &codegen).expect("Failed to write embedded_models.rs");
}

fn build_tiktoken_frozen(path: &Path) -> Vec<u8> {
    let data = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    let entries = ranks::parse_ranks(&data)
        .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    frozen::build_map(&entries)
}
