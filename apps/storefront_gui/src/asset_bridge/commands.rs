//! Commands queued from the UI to the asset worker.

pub enum AssetCommand {
    FetchProviderLogo { url: String },
}
