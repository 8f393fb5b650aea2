use crate::custom_assets::CustomAssetBundle;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    #[serde(default)]
    pub char_name: String,
    #[serde(default)]
    pub costume_name: String,
    #[serde(default)]
    pub spine: String,
    #[serde(default)]
    pub cutscene: String,
    #[serde(default)]
    pub dating: String,
    #[serde(default = "CharacterRecord::default_dating_has_no_bg")]
    pub dating_has_no_bg: bool,
    #[serde(skip)]
    pub custom_files: Option<CustomAssetBundle>,
}

impl CharacterRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            char_name: String::new(),
            costume_name: String::new(),
            spine: String::new(),
            cutscene: String::new(),
            dating: String::new(),
            dating_has_no_bg: true,
            custom_files: None,
        }
    }

    fn default_dating_has_no_bg() -> bool {
        true
    }

    pub fn has_cutscene(&self) -> bool {
        !self.cutscene.is_empty()
    }

    pub fn has_dating(&self) -> bool {
        !self.dating.is_empty()
    }

    pub fn has_custom_files(&self) -> bool {
        self.custom_files.is_some()
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<CharacterRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CharacterRecord>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for record in records {
            catalog.register(record)?;
        }
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let records: Vec<CharacterRecord> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        Self::from_records(records)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("[catalog] load error: {err:?}. Starting with an empty catalog.");
                Self::default()
            }
        }
    }

    pub fn register(&mut self, record: CharacterRecord) -> Result<()> {
        if self.index.contains_key(&record.id) {
            return Err(anyhow!("Character '{}' already registered", record.id));
        }
        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CharacterRecord> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut CharacterRecord> {
        let slot = *self.index.get(id)?;
        Some(&mut self.records[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.records.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CharacterRecord> {
        self.records.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    pub fn first_id(&self) -> Option<&str> {
        self.records.first().map(|record| record.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
