pub mod camera;
pub mod catalog;
pub mod config;
pub mod custom_assets;
pub mod store;
pub mod url_sync;

pub use camera::CameraPose;
pub use catalog::{Catalog, CharacterRecord};
pub use config::ViewerConfig;
pub use custom_assets::{AssetHandle, CustomAssetBundle};
pub use store::{AnimationCategory, CharacterStore};
pub use url_sync::{apply_url_params, build_url};
