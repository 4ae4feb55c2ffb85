//! Assets module - holding models, services, and traits.

mod assets_model;
mod assets_service;
mod assets_traits;


// Re-export the public interface
pub use assets_model::{Asset, AssetType, AssetUpdate, NewAsset, MAX_HOLDING_AMOUNT};
pub use assets_service::AssetService;
pub use assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
