//! Course tier catalog: passive domain types shared by the checkout flow
//! and the storefront GUI.

pub mod error;
pub mod tier;

pub use error::CatalogError;
pub use tier::{default_catalog, Catalog, Price, Tier, TierDetail, TierId};
