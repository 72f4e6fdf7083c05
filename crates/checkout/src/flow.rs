use catalog::{Tier, TierId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Payment,
    Confirmation,
}

/// The modal purchase flow. Opening always starts at the payment step;
/// dismissal clears the selected tier from whichever step it happens on.
/// Advancing to the confirmation step performs no verification of any real
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutFlow {
    #[default]
    Closed,
    Payment(TierId),
    Confirmation(TierId),
}

impl CheckoutFlow {
    /// Buy action for a tier card. A non-purchasable tier leaves the flow
    /// untouched and returns `false`.
    pub fn request_purchase(&mut self, tier: &Tier) -> bool {
        if !tier.purchasable {
            return false;
        }
        *self = CheckoutFlow::Payment(tier.id.clone());
        true
    }

    /// The buyer's "done" acknowledgement after a manual transfer. Only
    /// meaningful on the payment step.
    pub fn acknowledge_transfer(&mut self) {
        if let CheckoutFlow::Payment(tier) = self {
            let tier = tier.clone();
            *self = CheckoutFlow::Confirmation(tier);
        }
    }

    /// Close control or backdrop click, from either step.
    pub fn dismiss(&mut self) {
        *self = CheckoutFlow::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, CheckoutFlow::Closed)
    }

    pub fn selected_tier(&self) -> Option<&TierId> {
        match self {
            CheckoutFlow::Closed => None,
            CheckoutFlow::Payment(tier) | CheckoutFlow::Confirmation(tier) => Some(tier),
        }
    }

    pub fn step(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutFlow::Closed => None,
            CheckoutFlow::Payment(_) => Some(CheckoutStep::Payment),
            CheckoutFlow::Confirmation(_) => Some(CheckoutStep::Confirmation),
        }
    }
}
