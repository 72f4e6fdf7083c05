//! Checkout flow state for the storefront: the two-step manual-payment
//! modal machine, the card details expansion state, and the static payment
//! instructions shown to buyers. All state here is plain data, independent
//! of the rendering layer.

pub mod expansion;
pub mod flow;
pub mod instructions;

pub use expansion::DetailsExpansion;
pub use flow::{CheckoutFlow, CheckoutStep};
pub use instructions::PaymentInstructions;
