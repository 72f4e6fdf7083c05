//! Events posted by the asset worker back to the storefront window.

use crate::ui::app::PreviewImage;

pub enum UiEvent {
    ProviderLogoLoaded { image: PreviewImage },
    ProviderLogoFailed { reason: String },
}
