use anyhow::Result;
use std::collections::HashMap;
use std::fmt;

type Releaser = Box<dyn FnOnce() -> Result<()>>;

// A reference to an externally allocated resource (e.g. a blob object URL).
// The platform offers no finalizer for these, so the handle carries its own
// one-shot release hook; releasing twice is a no-op.
pub struct AssetHandle {
    uri: String,
    releaser: Option<Releaser>,
    released: bool,
}

impl AssetHandle {
    pub fn new(uri: impl Into<String>, releaser: impl FnOnce() -> Result<()> + 'static) -> Self {
        Self { uri: uri.into(), releaser: Some(Box::new(releaser)), released: false }
    }

    pub fn detached(uri: impl Into<String>) -> Self {
        Self { uri: uri.into(), releaser: None, released: false }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    // Release failures are not actionable; they are swallowed here and never
    // reach the caller.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(releaser) = self.releaser.take() {
            let _ = releaser();
        }
    }
}

impl fmt::Debug for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetHandle").field("uri", &self.uri).field("released", &self.released).finish()
    }
}

#[derive(Debug)]
pub struct CustomAssetBundle {
    pub skeleton: Option<AssetHandle>,
    pub animation_json: Option<AssetHandle>,
    pub atlas: AssetHandle,
    pub images: HashMap<String, AssetHandle>,
}

impl CustomAssetBundle {
    pub fn new(atlas: AssetHandle) -> Self {
        Self { skeleton: None, animation_json: None, atlas, images: HashMap::new() }
    }

    pub fn insert_image(&mut self, name: impl Into<String>, handle: AssetHandle) {
        self.images.insert(name.into(), handle);
    }

    pub fn handle_count(&self) -> usize {
        let optional = self.skeleton.is_some() as usize + self.animation_json.is_some() as usize;
        optional + 1 + self.images.len()
    }

    pub fn release_all(&mut self) {
        if let Some(skeleton) = self.skeleton.as_mut() {
            skeleton.release();
        }
        if let Some(animation_json) = self.animation_json.as_mut() {
            animation_json.release();
        }
        self.atlas.release();
        for handle in self.images.values_mut() {
            handle.release();
        }
    }
}
