//! Worker thread that fetches and decodes remote images, posting raw RGBA
//! back to the window for texture upload on first paint.

use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::asset_bridge::commands::AssetCommand;
use crate::controller::events::UiEvent;
use crate::ui::app::PreviewImage;

pub fn launch(cmd_rx: Receiver<AssetCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build asset worker runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::ProviderLogoFailed {
                    reason: format!("asset worker startup failure: {err}"),
                });
                return;
            }
        };

        runtime.block_on(async move {
            let http = reqwest::Client::new();
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    AssetCommand::FetchProviderLogo { url } => {
                        tracing::debug!(%url, "asset worker: fetch provider logo");
                        match fetch_image(&http, &url).await {
                            Ok(image) => {
                                let _ = ui_tx.try_send(UiEvent::ProviderLogoLoaded { image });
                            }
                            Err(reason) => {
                                tracing::warn!(%url, "provider logo fetch failed: {reason}");
                                let _ = ui_tx.try_send(UiEvent::ProviderLogoFailed { reason });
                            }
                        }
                    }
                }
            }
        });
    });
}

async fn fetch_image(http: &reqwest::Client, url: &str) -> Result<PreviewImage, String> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?
        .error_for_status()
        .map_err(|err| err.to_string())?;
    let bytes = response.bytes().await.map_err(|err| err.to_string())?;
    decode_image(&bytes)
}

fn decode_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic.thumbnail(128, 128).to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PreviewImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_bounds_a_png_logo() {
        let mut png = Vec::new();
        let rgba = image::RgbaImage::from_pixel(300, 200, image::Rgba([10, 20, 30, 255]));
        image::DynamicImage::ImageRgba8(rgba)
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageFormat::Png,
            )
            .expect("encode fixture png");

        let decoded = decode_image(&png).expect("decode logo");

        assert!(decoded.width <= 128 && decoded.height <= 128);
        assert_eq!(decoded.rgba.len(), decoded.width * decoded.height * 4);
    }

    #[test]
    fn rejects_bytes_that_are_not_an_image() {
        assert!(decode_image(b"definitely not an image").is_err());
    }
}
