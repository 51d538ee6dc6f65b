use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static MAP_BRIDGE_JS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css"))
        .as_str()
}

/// Returns the Leaflet bridge script evaluated by the map widget.
pub fn map_bridge_js() -> &'static str {
    MAP_BRIDGE_JS
        .get_or_init(|| load_text("/assets/map_bridge.js"))
        .as_str()
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_drop_assets_prefix() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("map_bridge.js"), "map_bridge.js");
    }

    #[test]
    fn bridge_script_handles_every_command() {
        let script = map_bridge_js();
        for op in [
            "create_map",
            "add_tile_layer",
            "add_marker",
            "add_polyline",
            "remove_layer",
            "fit_bounds",
            "set_view",
        ] {
            assert!(script.contains(op), "bridge script misses {op}");
        }
    }

    #[test]
    fn stylesheet_defines_neon_palette() {
        let css = main_css();
        assert!(css.contains("--neon-blue"));
        assert!(css.contains("--neon-green"));
        assert!(css.contains("--neon-orange"));
    }
}
