use serde::Deserialize;

/// Static manual-payment instructions shown in the modal. There is no
/// programmatic verification anywhere: the buyer transfers money out of
/// band and submits proof through the verification bot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentInstructions {
    pub provider_name: String,
    pub provider_logo_url: String,
    pub account_number: String,
    pub account_holder: String,
    pub verification_bot_url: String,
    pub support_contact_url: String,
    /// Stated window after which buyers should escalate to the support
    /// contact. Display text only.
    pub follow_up_hours: u32,
}

impl Default for PaymentInstructions {
    fn default() -> Self {
        Self {
            provider_name: "Telebirr".to_string(),
            provider_logo_url:
                "https://upload.wikimedia.org/wikipedia/commons/2/2a/Telebirr.png".to_string(),
            account_number: "0978366565".to_string(),
            account_holder: "Alemseged".to_string(),
            verification_bot_url: "https://t.me/Confirm_TenaNet_BOT".to_string(),
            support_contact_url: "https://t.me/oryn179".to_string(),
            follow_up_hours: 24,
        }
    }
}
