pub mod answer_input;
pub mod app;
pub mod item_sprite;
pub mod scale_view;
pub mod toast;

use crate::model::AssetHandle;

/// Resolves an asset handle to the URL trunk serves it from.
pub fn asset_url(handle: &AssetHandle) -> String {
    format!("assets/{}", handle.path())
}
