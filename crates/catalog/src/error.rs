use thiserror::Error;

use crate::tier::TierId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("tier id must not be empty")]
    EmptyTierId,
    #[error("duplicate tier id '{0}'")]
    DuplicateTierId(TierId),
    #[error("more than one tier is marked highlighted ('{first}' and '{second}')")]
    MultipleHighlights { first: TierId, second: TierId },
    #[error("non-purchasable tier '{0}' must not carry a concrete price")]
    PricedButNotPurchasable(TierId),
    #[error("tier '{0}' has no feature lines")]
    NoFeatures(TierId),
}
