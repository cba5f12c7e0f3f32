//! Bundles the shell stylesheet.
//!
//! `assets/css/main.css` only holds base rules and `@import`s the token,
//! animation and component sheets; inline style records in `app::styles`
//! cannot express keyframes or `:hover`, so those live here. The result is
//! written to `assets/dist/bundle.css`, which the shell layout loads via
//! `asset!`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY_STYLESHEET: &str = "assets/css/main.css";
const OUTPUT_BUNDLE: &str = "assets/dist/bundle.css";

fn main() {
    watch_stylesheets();

    let css = match bundle_stylesheet(Path::new(ENTRY_STYLESHEET)) {
        Ok(css) => css,
        Err(e) => panic!("Failed to build {OUTPUT_BUNDLE}: {e}"),
    };

    if let Some(dir) = Path::new(OUTPUT_BUNDLE).parent() {
        fs::create_dir_all(dir).unwrap_or_else(|e| panic!("Failed to create {}: {e}", dir.display()));
    }

    // Skip rewriting an unchanged bundle so the asset hash stays stable
    let unchanged = fs::read_to_string(OUTPUT_BUNDLE).is_ok_and(|existing| existing == css);
    if !unchanged {
        fs::write(OUTPUT_BUNDLE, css).unwrap_or_else(|e| panic!("Failed to write {OUTPUT_BUNDLE}: {e}"));
    }
}

/// Re-run when any imported sheet changes, not only the entry point
fn watch_stylesheets() {
    println!("cargo:rerun-if-changed={CSS_DIR}");
    let Ok(entries) = fs::read_dir(CSS_DIR) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

/// Resolve `@import`s, minify, and print a single CSS string
fn bundle_stylesheet(entry: &Path) -> Result<String, String> {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundling {}: {e:?}", entry.display()))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying: {e:?}"))?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {e:?}"))?;

    Ok(output.code)
}
