//! Game tunables and the item catalog.
//!
//! Loaded once at startup from the embedded `assets/game.json`. Any field the
//! file omits takes its default; a file that fails to parse or validate is
//! replaced by [`GameConfig::default`] with a console warning.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::{AssetHandle, ItemId};
use crate::notify::{NotifyOptions, Placement};
use crate::util::cwarn;

const EMBEDDED: &str = include_str!("../assets/game.json");

/// Longest accepted settle or reset delay.
const MAX_TIMING_MS: u32 = 60_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: ItemId,
    pub name: String,
    pub weight: f64,
    pub asset: AssetHandle,
    /// Vertical correction applied when the item sits on the plate; artwork
    /// with uneven padding needs a few pixels either way.
    #[serde(default)]
    pub anchor_nudge: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub start_x: f64,
    pub spacing: f64,
    pub row_y: f64,
    pub container_width: f64,
    pub container_height: f64,
    pub item_size: f64,
    pub scale_width: f64,
    pub scale_height: f64,
    /// Depth of the plate surface below the scale's top edge. A weighed item's
    /// bottom edge rests there, so its top-left sits `item_size - plate_offset`
    /// above that edge.
    pub plate_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: 60.0,
            spacing: 260.0,
            row_y: 200.0,
            container_width: 1200.0,
            container_height: 400.0,
            item_size: 220.0,
            scale_width: 180.0,
            scale_height: 220.0,
            plate_offset: 90.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Plate dip duration, measured from the drop.
    pub settle_ms: u32,
    /// Delay after settling before items go home and the pointer drops back.
    pub reset_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { settle_ms: 1200, reset_ms: 1200 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub base_degrees: f64,
    pub degrees_per_kg: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { base_degrees: 0.0, degrees_per_kg: 18.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub placement: Placement,
    pub duration_ms: u32,
}

impl NotifyConfig {
    pub fn options(&self) -> NotifyOptions {
        NotifyOptions { placement: self.placement, duration_ms: self.duration_ms }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self { placement: Placement::TopRight, duration_ms: 1500 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneAssets {
    pub background: AssetHandle,
    pub scale_base: AssetHandle,
    pub scale_plate: AssetHandle,
    pub scale_pointer: AssetHandle,
}

impl Default for SceneAssets {
    fn default() -> Self {
        Self {
            background: AssetHandle::new("images/background.png"),
            scale_base: AssetHandle::new("scale/base.png"),
            scale_plate: AssetHandle::new("scale/plate.png"),
            scale_pointer: AssetHandle::new("scale/pointer.png"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub pointer: PointerConfig,
    pub notify: NotifyConfig,
    pub assets: SceneAssets,
    /// Accepted distance between guess and true weight. Zero keeps exact equality.
    pub answer_tolerance: f64,
    pub prompt: String,
    pub unit: String,
    pub items: Vec<ItemSpec>,
    pub debug_log: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            timing: TimingConfig::default(),
            pointer: PointerConfig::default(),
            notify: NotifyConfig::default(),
            assets: SceneAssets::default(),
            answer_tolerance: 0.0,
            prompt: "How much does it weigh:".to_string(),
            unit: "kg".to_string(),
            items: vec![
                ItemSpec {
                    id: ItemId(1),
                    name: "Fish".to_string(),
                    weight: 9.0,
                    asset: AssetHandle::new("images/fish.png"),
                    anchor_nudge: 0.0,
                },
                ItemSpec {
                    id: ItemId(2),
                    name: "Pumpkin".to_string(),
                    weight: 8.0,
                    asset: AssetHandle::new("images/pumpkin.png"),
                    anchor_nudge: 0.0,
                },
                ItemSpec {
                    id: ItemId(3),
                    name: "Kettle".to_string(),
                    weight: 7.0,
                    asset: AssetHandle::new("images/kettle.png"),
                    anchor_nudge: 12.0,
                },
            ],
            debug_log: false,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Embedded config, or defaults if it is unusable.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(cfg) => cfg,
            Err(e) => {
                cwarn(&format!("falling back to default config: {}", e));
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.layout;
        if !(l.item_size > 0.0) {
            return Err(ConfigError::Invalid("item_size must be positive".into()));
        }
        if l.container_width < l.item_size || l.container_height < l.item_size {
            return Err(ConfigError::Invalid(
                "container must be at least one item wide and tall".into(),
            ));
        }
        let t = &self.timing;
        if t.settle_ms > MAX_TIMING_MS || t.reset_ms > MAX_TIMING_MS {
            return Err(ConfigError::Invalid(format!(
                "settle_ms and reset_ms must be at most {} ms",
                MAX_TIMING_MS
            )));
        }
        if !(self.answer_tolerance >= 0.0) {
            return Err(ConfigError::Invalid("answer_tolerance must be >= 0".into()));
        }
        if self.items.is_empty() {
            return Err(ConfigError::Invalid("item catalog is empty".into()));
        }
        let mut seen = BTreeSet::new();
        for it in &self.items {
            if !(it.weight > 0.0) || !it.weight.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "item {} has non-positive weight",
                    it.id.0
                )));
            }
            if !seen.insert(it.id) {
                return Err(ConfigError::Invalid(format!("duplicate item id {}", it.id.0)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let cfg = GameConfig::from_json(EMBEDDED).expect("embedded config parses");
        assert_eq!(cfg.items.len(), 3);
        assert_eq!(cfg.timing.settle_ms, 1200);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = GameConfig::from_json(r#"{ "unit": "lb" }"#).unwrap();
        assert_eq!(cfg.unit, "lb");
        assert_eq!(cfg.layout, LayoutConfig::default());
        assert_eq!(cfg.pointer.degrees_per_kg, 18.0);
        assert_eq!(cfg.items.len(), 3);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"{ "items": [
            { "id": 1, "name": "a", "weight": 1, "asset": "a.png" },
            { "id": 1, "name": "b", "weight": 2, "asset": "b.png" }
        ] }"#;
        assert!(matches!(GameConfig::from_json(raw), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_non_positive_weight() {
        let raw = r#"{ "items": [ { "id": 1, "name": "a", "weight": 0, "asset": "a.png" } ] }"#;
        assert!(matches!(GameConfig::from_json(raw), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "items": [] }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_oversized_timing() {
        let raw = r#"{ "timing": { "settle_ms": 4000000000, "reset_ms": 1200 } }"#;
        assert!(matches!(GameConfig::from_json(raw), Err(ConfigError::Invalid(_))));
        let raw = r#"{ "timing": { "settle_ms": 60000, "reset_ms": 60000 } }"#;
        assert!(GameConfig::from_json(raw).is_ok());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
    }
}
