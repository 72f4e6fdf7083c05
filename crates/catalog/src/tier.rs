use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(pub String);

impl TierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display price of a tier. `ComingSoon` is the "not yet available"
/// sentinel: such tiers render no amount and cannot be bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Price {
    Etb(u32),
    ComingSoon,
}

impl Price {
    pub fn amount(&self) -> Option<u32> {
        match self {
            Price::Etb(amount) => Some(*amount),
            Price::ComingSoon => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Price::Etb(_))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Etb(amount) => write!(f, "{amount} ETB"),
            Price::ComingSoon => f.write_str("Coming Soon"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDetail {
    pub label: String,
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: TierId,
    pub name: String,
    pub glyph: String,
    pub tagline: String,
    pub price: Price,
    pub features: Vec<String>,
    /// Supplementary entries behind the expand/collapse toggle. Empty for
    /// tiers without one.
    pub details: Vec<TierDetail>,
    pub purchasable: bool,
    pub highlighted: bool,
}

impl Tier {
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub tiers: Vec<Tier>,
}

impl Catalog {
    pub fn tier(&self, id: &TierId) -> Option<&Tier> {
        self.tiers.iter().find(|tier| &tier.id == id)
    }

    pub fn highlighted_tier(&self) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.highlighted)
    }

    /// Startup invariant check. An invalid embedded catalog is an
    /// unrecoverable fault; callers bail before opening the window.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.tiers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut highlighted: Option<&TierId> = None;
        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.id.as_str().is_empty() {
                return Err(CatalogError::EmptyTierId);
            }
            if self.tiers[..index].iter().any(|other| other.id == tier.id) {
                return Err(CatalogError::DuplicateTierId(tier.id.clone()));
            }
            if tier.highlighted {
                if let Some(first) = highlighted {
                    return Err(CatalogError::MultipleHighlights {
                        first: first.clone(),
                        second: tier.id.clone(),
                    });
                }
                highlighted = Some(&tier.id);
            }
            if !tier.purchasable && tier.price.is_available() {
                return Err(CatalogError::PricedButNotPurchasable(tier.id.clone()));
            }
            if tier.features.is_empty() {
                return Err(CatalogError::NoFeatures(tier.id.clone()));
            }
        }

        Ok(())
    }
}

fn features(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

/// The embedded course catalog. Order is display order.
pub fn default_catalog() -> Catalog {
    Catalog {
        tiers: vec![
            Tier {
                id: TierId::new("standard"),
                name: "Standard".to_string(),
                glyph: "🎬".to_string(),
                tagline: "Perfect for visual learners starting their journey.".to_string(),
                price: Price::Etb(238),
                features: features(&[
                    "Only Videos",
                    "Basic Hacking Concepts",
                    "Network Fundamentals",
                ]),
                details: Vec::new(),
                purchasable: true,
                highlighted: false,
            },
            Tier {
                id: TierId::new("vip"),
                name: "VIP".to_string(),
                glyph: "📖".to_string(),
                tagline: "For those who prefer reading and deep diving into documentation."
                    .to_string(),
                price: Price::Etb(348),
                features: features(&["Only Books (PDFs)", "Deep Theory", "Scripting Manuals"]),
                details: Vec::new(),
                purchasable: true,
                highlighted: false,
            },
            Tier {
                id: TierId::new("vvip"),
                name: "VVIP".to_string(),
                glyph: "⭐".to_string(),
                tagline: "The complete package. Everything you need to dominate.".to_string(),
                price: Price::Etb(590),
                features: features(&[
                    "Books + Videos",
                    "Social Media App Methods",
                    "Exclusive Tools Access",
                ]),
                details: vec![
                    TierDetail {
                        label: "How To Get YouTube Premium".to_string(),
                        glyph: "▶".to_string(),
                    },
                    TierDetail {
                        label: "How To Get Prime Video Premium".to_string(),
                        glyph: "📺".to_string(),
                    },
                    TierDetail {
                        label: "How To Get Crunchyroll Premium".to_string(),
                        glyph: "🎞".to_string(),
                    },
                ],
                purchasable: true,
                highlighted: true,
            },
            Tier {
                id: TierId::new("premium"),
                name: "Premium".to_string(),
                glyph: "🔒".to_string(),
                tagline: "We are cooking...".to_string(),
                price: Price::ComingSoon,
                features: features(&[
                    "Advanced Exploits",
                    "Private Community",
                    "1-on-1 Mentorship",
                ]),
                details: Vec::new(),
                purchasable: false,
                highlighted: false,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_passes_validation() {
        default_catalog().validate().expect("embedded catalog");
    }

    #[test]
    fn default_catalog_highlights_exactly_vvip() {
        let catalog = default_catalog();
        let highlighted = catalog.highlighted_tier().expect("one highlighted tier");
        assert_eq!(highlighted.id, TierId::new("vvip"));
        assert_eq!(
            catalog.tiers.iter().filter(|tier| tier.highlighted).count(),
            1
        );
    }

    #[test]
    fn non_purchasable_tier_has_no_price() {
        let catalog = default_catalog();
        let premium = catalog.tier(&TierId::new("premium")).expect("premium tier");
        assert!(!premium.purchasable);
        assert_eq!(premium.price, Price::ComingSoon);
        assert_eq!(premium.price.amount(), None);
    }

    #[test]
    fn rejects_duplicate_tier_ids() {
        let mut catalog = default_catalog();
        let mut copy = catalog.tiers[0].clone();
        copy.highlighted = false;
        catalog.tiers.push(copy);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateTierId(TierId::new("standard")))
        );
    }

    #[test]
    fn rejects_second_highlighted_tier() {
        let mut catalog = default_catalog();
        catalog.tiers[0].highlighted = true;
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MultipleHighlights {
                first: TierId::new("standard"),
                second: TierId::new("vvip"),
            })
        );
    }

    #[test]
    fn rejects_priced_but_not_purchasable_tier() {
        let mut catalog = default_catalog();
        let premium = catalog
            .tiers
            .iter_mut()
            .find(|tier| tier.id == TierId::new("premium"))
            .expect("premium tier");
        premium.price = Price::Etb(999);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::PricedButNotPurchasable(TierId::new("premium")))
        );
    }

    #[test]
    fn price_labels_match_display_rules() {
        assert_eq!(Price::Etb(590).to_string(), "590 ETB");
        assert_eq!(Price::ComingSoon.to_string(), "Coming Soon");
    }

    #[test]
    fn zero_highlight_catalog_is_valid() {
        let mut catalog = default_catalog();
        for tier in &mut catalog.tiers {
            tier.highlighted = false;
        }
        catalog.validate().expect("no-highlight catalog");
    }
}
