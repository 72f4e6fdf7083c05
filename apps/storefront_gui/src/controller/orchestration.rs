//! Command dispatch from UI actions to the asset worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::asset_bridge::commands::AssetCommand;

pub fn dispatch_asset_command(
    cmd_tx: &Sender<AssetCommand>,
    cmd: AssetCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        AssetCommand::FetchProviderLogo { .. } => "fetch_provider_logo",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->asset command"),
        Err(TrySendError::Full(_)) => {
            *status = "Asset queue is full; retry shortly".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Asset worker disconnected; the provider logo will not load".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn fetch_cmd() -> AssetCommand {
        AssetCommand::FetchProviderLogo {
            url: "https://example.invalid/logo.png".to_string(),
        }
    }

    #[test]
    fn reports_full_queue_in_status_line() {
        let (tx, _rx) = bounded::<AssetCommand>(0);
        let mut status = String::new();

        dispatch_asset_command(&tx, fetch_cmd(), &mut status);

        assert!(status.contains("full"), "status was: {status}");
    }

    #[test]
    fn reports_disconnected_worker_in_status_line() {
        let (tx, rx) = bounded::<AssetCommand>(1);
        drop(rx);
        let mut status = String::new();

        dispatch_asset_command(&tx, fetch_cmd(), &mut status);

        assert!(status.contains("disconnected"), "status was: {status}");
    }

    #[test]
    fn successful_dispatch_leaves_status_untouched() {
        let (tx, rx) = bounded::<AssetCommand>(1);
        let mut status = String::new();

        dispatch_asset_command(&tx, fetch_cmd(), &mut status);

        assert!(status.is_empty());
        assert!(rx.try_recv().is_ok());
    }
}
