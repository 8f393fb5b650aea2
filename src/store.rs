use crate::camera::CameraPose;
use crate::catalog::{Catalog, CharacterRecord};
use crate::config::ViewerConfig;
use crate::custom_assets::CustomAssetBundle;
use anyhow::Result;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationCategory {
    #[default]
    Character,
    Ultimate,
    Dating,
}

impl AnimationCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationCategory::Character => "character",
            AnimationCategory::Ultimate => "ultimate",
            AnimationCategory::Dating => "dating",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "character" => Some(AnimationCategory::Character),
            "ultimate" => Some(AnimationCategory::Ultimate),
            "dating" => Some(AnimationCategory::Dating),
            _ => None,
        }
    }
}

// Single source of truth for what the viewer currently displays. Created once
// at application start and handed by reference to whichever layer mutates it;
// all mutation is single-threaded and runs to completion.
pub struct CharacterStore {
    catalog: Catalog,
    pub selected_character_id: String,
    pub selected_animation: String,
    pub selected_skin: String,
    pub animation_category: AnimationCategory,
    pub playing: bool,
    pub animation_speed: f32,
    pub background_color: String,
    pub use_current_camera: bool,
    pub show_dating_bg: bool,
    pub drag_speed_multiplier: f32,
    camera_by_character: HashMap<String, CameraPose>,
    asset_reload_token: u64,
    mru_custom_ids: SmallVec<[String; 8]>,
}

impl CharacterStore {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, &ViewerConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: &ViewerConfig) -> Self {
        let selected_character_id = catalog.first_id().map(str::to_string).unwrap_or_default();
        Self {
            catalog,
            selected_character_id,
            selected_animation: String::new(),
            selected_skin: String::new(),
            animation_category: AnimationCategory::Character,
            playing: true,
            animation_speed: config.animation_speed,
            background_color: config.background_color.clone(),
            use_current_camera: false,
            show_dating_bg: true,
            drag_speed_multiplier: config.drag_speed_multiplier,
            camera_by_character: HashMap::new(),
            asset_reload_token: 0,
            mru_custom_ids: SmallVec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn register_character(&mut self, record: CharacterRecord) -> Result<()> {
        self.catalog.register(record)
    }

    pub fn character(&self, id: &str) -> Option<&CharacterRecord> {
        self.catalog.get(id)
    }

    pub fn selected_character(&self) -> Option<&CharacterRecord> {
        self.catalog.get(&self.selected_character_id)
    }

    pub fn mru_custom_ids(&self) -> &[String] {
        &self.mru_custom_ids
    }

    pub fn add_to_mru(&mut self, id: &str) {
        if let Some(pos) = self.mru_custom_ids.iter().position(|entry| entry == id) {
            self.mru_custom_ids.remove(pos);
        }
        self.mru_custom_ids.insert(0, id.to_string());
    }

    // Attaches a freshly loaded bundle to the record, releasing whatever it
    // held before. Returns false (and releases the bundle) for unknown ids.
    pub fn attach_custom_files(&mut self, id: &str, mut bundle: CustomAssetBundle) -> bool {
        let Some(record) = self.catalog.get_mut(id) else {
            bundle.release_all();
            return false;
        };
        if let Some(mut previous) = record.custom_files.take() {
            previous.release_all();
        }
        record.custom_files = Some(bundle);
        true
    }

    pub fn revoke_custom_files(&mut self, id: &str) {
        let Some(record) = self.catalog.get_mut(id) else { return };
        if let Some(mut bundle) = record.custom_files.take() {
            bundle.release_all();
        }
    }

    // Truncate the MRU to `max_keep`, then sweep every record whose id fell
    // out of the surviving set. Recency is tracked only through add_to_mru.
    pub fn trim_memory(&mut self, max_keep: usize) {
        self.mru_custom_ids.truncate(max_keep);
        for record in self.catalog.iter_mut() {
            if record.custom_files.is_none() {
                continue;
            }
            if self.mru_custom_ids.iter().any(|kept| kept == &record.id) {
                continue;
            }
            if let Some(mut bundle) = record.custom_files.take() {
                bundle.release_all();
            }
        }
    }

    pub fn camera_pose(&self, id: &str) -> Option<CameraPose> {
        self.camera_by_character.get(id).copied()
    }

    pub fn remember_camera(&mut self, id: &str, pose: CameraPose) {
        self.camera_by_character.insert(id.to_string(), pose);
    }

    pub fn drag_camera(&mut self, id: &str, delta: Vec2) {
        let multiplier = self.drag_speed_multiplier;
        self.camera_by_character.entry(id.to_string()).or_default().apply_drag(delta, multiplier);
    }

    pub fn asset_reload_token(&self) -> u64 {
        self.asset_reload_token
    }

    pub fn bump_asset_reload_token(&mut self) -> u64 {
        self.asset_reload_token += 1;
        self.asset_reload_token
    }
}
