use std::time::Duration;

use catalog::{Catalog, Tier};
use checkout::{CheckoutFlow, CheckoutStep, DetailsExpansion, PaymentInstructions};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::asset_bridge::commands::AssetCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_asset_command;
use crate::ui::theme::{
    storefront_palette, tier_accent, visuals_for_theme, StorefrontPalette, ThemeSettings,
};

/// Raw RGBA decoded by the asset worker; the texture upload happens on the
/// UI thread at first paint.
pub(crate) struct PreviewImage {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) rgba: Vec<u8>,
}

struct ProviderLogo {
    image: PreviewImage,
    texture: Option<egui::TextureHandle>,
}

enum ProviderLogoState {
    NotRequested,
    Loading,
    Ready(ProviderLogo),
    Failed(String),
}

pub struct StorefrontApp {
    catalog: Catalog,
    instructions: PaymentInstructions,
    flow: CheckoutFlow,
    expansion: DetailsExpansion,
    logo: ProviderLogoState,
    theme: ThemeSettings,
    theme_applied: bool,
    status: String,
    cmd_tx: Sender<AssetCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl StorefrontApp {
    pub fn new(
        catalog: Catalog,
        instructions: PaymentInstructions,
        cmd_tx: Sender<AssetCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            catalog,
            instructions,
            flow: CheckoutFlow::default(),
            expansion: DetailsExpansion::default(),
            logo: ProviderLogoState::NotRequested,
            theme: ThemeSettings::storefront_default(),
            theme_applied: false,
            status: String::new(),
            cmd_tx,
            ui_rx,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ProviderLogoLoaded { image } => {
                    self.logo = ProviderLogoState::Ready(ProviderLogo {
                        image,
                        texture: None,
                    });
                }
                UiEvent::ProviderLogoFailed { reason } => {
                    tracing::warn!("provider logo unavailable: {reason}");
                    self.logo = ProviderLogoState::Failed(reason);
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        ctx.set_visuals(visuals_for_theme(self.theme));
        self.theme_applied = true;
    }

    // ---------- course section ----------

    fn show_course_section(&mut self, ctx: &egui::Context) {
        let palette = storefront_palette();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.page_background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.show_section_header(ui, &palette);
                        self.show_tier_grid(ui);
                        self.show_status_line(ui, &palette);
                    });
            });
    }

    fn show_section_header(&self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Ethical Hacking Courses")
                    .size(32.0)
                    .strong()
                    .color(palette.headline_text),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "Master the art of cybersecurity. Choose your path and start your journey today.",
                )
                .size(15.0)
                .color(palette.muted_text),
            );
        });
        ui.add_space(26.0);
    }

    fn show_tier_grid(&mut self, ui: &mut egui::Ui) {
        let columns = grid_column_count(ui.available_width());
        let tiers = self.catalog.tiers.clone();
        for row in tiers.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, tier) in cols.iter_mut().zip(row.iter()) {
                    self.show_tier_card(col, tier);
                }
            });
            ui.add_space(14.0);
        }
    }

    fn show_status_line(&self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        if self.status.is_empty() {
            return;
        }
        ui.vertical_centered(|ui| {
            ui.small(egui::RichText::new(&self.status).color(palette.faint_text));
        });
        ui.add_space(8.0);
    }

    fn show_tier_card(&mut self, ui: &mut egui::Ui, tier: &Tier) {
        let palette = storefront_palette();
        let accent = tier_accent(tier);
        let stroke = if tier.highlighted {
            egui::Stroke::new(1.5, accent)
        } else {
            egui::Stroke::new(1.0, palette.card_stroke)
        };

        egui::Frame::new()
            .fill(palette.card_background)
            .stroke(stroke)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_height(380.0);

                if tier.highlighted {
                    ui.vertical_centered(|ui| {
                        egui::Frame::new()
                            .fill(palette.highlight)
                            .corner_radius(10.0)
                            .inner_margin(egui::Margin::symmetric(10, 3))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("BEST VALUE")
                                        .size(10.0)
                                        .strong()
                                        .color(egui::Color32::BLACK),
                                );
                            });
                    });
                    ui.add_space(6.0);
                }

                ui.label(egui::RichText::new(&tier.glyph).size(22.0).color(accent));
                ui.add_space(2.0);
                ui.label(
                    egui::RichText::new(&tier.name)
                        .size(20.0)
                        .strong()
                        .color(palette.headline_text),
                );
                self.show_price_line(ui, tier, &palette);
                ui.label(
                    egui::RichText::new(&tier.tagline)
                        .size(12.0)
                        .color(palette.muted_text),
                );
                ui.add_space(10.0);

                for feature in &tier.features {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("✔").size(12.0).color(accent));
                        ui.label(
                            egui::RichText::new(feature)
                                .size(13.0)
                                .color(palette.body_text),
                        );
                    });
                }

                if tier.has_details() {
                    ui.add_space(4.0);
                    self.show_details_toggle(ui, tier, &palette);
                }

                ui.add_space(12.0);
                self.show_buy_button(ui, tier, &palette);
            });
    }

    fn show_price_line(&self, ui: &mut egui::Ui, tier: &Tier, palette: &StorefrontPalette) {
        match tier.price.amount() {
            Some(amount) => {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(
                        egui::RichText::new(amount.to_string())
                            .size(26.0)
                            .strong()
                            .color(palette.headline_text),
                    );
                    ui.label(
                        egui::RichText::new("ETB")
                            .size(12.0)
                            .color(palette.muted_text),
                    );
                });
            }
            None => {
                ui.label(
                    egui::RichText::new("Coming Soon")
                        .size(17.0)
                        .italics()
                        .color(palette.faint_text),
                );
            }
        }
    }

    fn show_details_toggle(&mut self, ui: &mut egui::Ui, tier: &Tier, palette: &StorefrontPalette) {
        let expanded = self.expansion.is_expanded(&tier.id);
        let toggle_label = if expanded {
            "⌃ Hide Extras"
        } else {
            "⌄ View Extras"
        };
        let toggle = egui::Button::new(
            egui::RichText::new(toggle_label)
                .size(11.0)
                .color(palette.highlight),
        )
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::NONE);
        if ui.add(toggle).clicked() {
            self.expansion.toggle(&tier.id);
        }

        if self.expansion.is_expanded(&tier.id) {
            ui.indent("tier_details", |ui| {
                for detail in &tier.details {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&detail.glyph)
                                .size(11.0)
                                .color(palette.highlight),
                        );
                        ui.label(
                            egui::RichText::new(&detail.label)
                                .size(11.0)
                                .color(palette.muted_text),
                        );
                    });
                }
            });
        }
    }

    fn show_buy_button(&mut self, ui: &mut egui::Ui, tier: &Tier, palette: &StorefrontPalette) {
        let (label, fill, text_color) = if !tier.purchasable {
            (
                "We are cooking...",
                palette.disabled_fill,
                palette.disabled_text,
            )
        } else if tier.highlighted {
            ("Buy Paid Course", palette.highlight, egui::Color32::BLACK)
        } else {
            ("Buy Paid Course", egui::Color32::WHITE, egui::Color32::BLACK)
        };

        let button = egui::Button::new(
            egui::RichText::new(label)
                .size(13.0)
                .strong()
                .color(text_color),
        )
        .fill(fill)
        .corner_radius(8.0)
        .min_size(egui::vec2(ui.available_width(), 36.0));

        if ui.add_enabled(tier.purchasable, button).clicked() && self.flow.request_purchase(tier) {
            tracing::debug!(tier = tier.id.as_str(), "checkout opened");
        }
    }

    // ---------- checkout modal ----------

    fn show_checkout_modal(&mut self, ctx: &egui::Context) {
        let Some(step) = self.flow.step() else {
            return;
        };
        let tier = self
            .flow
            .selected_tier()
            .and_then(|id| self.catalog.tier(id))
            .cloned();
        let Some(tier) = tier else {
            // Selection points at a tier the catalog no longer carries.
            self.flow.dismiss();
            return;
        };

        let screen = ctx.screen_rect();
        let backdrop = egui::Area::new(egui::Id::new("checkout_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(192));
                ui.allocate_rect(screen, egui::Sense::click())
            });
        if backdrop.inner.clicked() {
            self.flow.dismiss();
            return;
        }

        let palette = storefront_palette();
        egui::Window::new("checkout")
            .id(egui::Id::new("checkout_modal_window"))
            .order(egui::Order::Foreground)
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .min_width(340.0)
            .max_width(380.0)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(palette.card_background)
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .corner_radius(egui::CornerRadius::same(14))
                    .inner_margin(egui::Margin::same(18)),
            )
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let close = egui::Button::new(
                        egui::RichText::new("✕").size(16.0).color(palette.muted_text),
                    )
                    .fill(egui::Color32::TRANSPARENT)
                    .stroke(egui::Stroke::NONE);
                    if ui.add(close).clicked() {
                        self.flow.dismiss();
                    }
                });
                if !self.flow.is_open() {
                    return;
                }

                match step {
                    CheckoutStep::Payment => self.show_payment_step(ui, &tier, &palette),
                    CheckoutStep::Confirmation => self.show_confirmation_step(ui, &palette),
                }
            });
    }

    fn show_payment_step(&mut self, ui: &mut egui::Ui, tier: &Tier, palette: &StorefrontPalette) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Payment Details")
                    .size(22.0)
                    .strong()
                    .color(palette.headline_text),
            );
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.add_space(ui.available_width() / 2.0 - 70.0);
                ui.label(
                    egui::RichText::new("Purchase")
                        .size(13.0)
                        .color(palette.muted_text),
                );
                ui.label(
                    egui::RichText::new(&tier.name)
                        .size(13.0)
                        .strong()
                        .color(tier_accent(tier)),
                );
                ui.label(
                    egui::RichText::new("Tier")
                        .size(13.0)
                        .color(palette.muted_text),
                );
            });
        });
        ui.add_space(10.0);

        egui::Frame::new()
            .fill(palette.card_inner_background)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("AMOUNT")
                            .monospace()
                            .size(11.0)
                            .color(palette.muted_text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(tier.price.to_string())
                                .size(24.0)
                                .strong()
                                .color(palette.headline_text),
                        );
                    });
                });
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    self.show_provider_logo(ui, palette);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("Payment Method")
                                .size(11.0)
                                .color(palette.muted_text),
                        );
                        ui.label(
                            egui::RichText::new(&self.instructions.provider_name)
                                .strong()
                                .color(palette.headline_text),
                        );
                    });
                });

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Phone No")
                            .size(12.0)
                            .color(palette.faint_text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.instructions.account_number)
                                .monospace()
                                .color(palette.headline_text),
                        );
                    });
                });
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Name")
                            .size(12.0)
                            .color(palette.faint_text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.instructions.account_holder)
                                .color(palette.headline_text),
                        );
                    });
                });
            });

        ui.add_space(12.0);
        let done = egui::Button::new(
            egui::RichText::new("DONE")
                .size(15.0)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(self.theme.accent_color)
        .corner_radius(8.0)
        .min_size(egui::vec2(ui.available_width(), 42.0));
        if ui.add(done).clicked() {
            self.flow.acknowledge_transfer();
        }
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.small(
                egui::RichText::new("Click DONE after you have completed the transfer.")
                    .color(palette.faint_text),
            );
        });
    }

    fn show_provider_logo(&mut self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        if matches!(self.logo, ProviderLogoState::NotRequested) {
            dispatch_asset_command(
                &self.cmd_tx,
                AssetCommand::FetchProviderLogo {
                    url: self.instructions.provider_logo_url.clone(),
                },
                &mut self.status,
            );
            self.logo = ProviderLogoState::Loading;
        }

        egui::Frame::new()
            .fill(egui::Color32::WHITE)
            .corner_radius(6.0)
            .inner_margin(egui::Margin::same(4))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(32.0, 32.0));
                match &mut self.logo {
                    ProviderLogoState::Ready(logo) => {
                        if logo.texture.is_none() {
                            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                                [logo.image.width, logo.image.height],
                                &logo.image.rgba,
                            );
                            logo.texture = Some(ui.ctx().load_texture(
                                "provider-logo",
                                color_image,
                                egui::TextureOptions::LINEAR,
                            ));
                        }
                        if let Some(texture) = &logo.texture {
                            ui.add(
                                egui::Image::new(texture).fit_to_exact_size(egui::vec2(32.0, 32.0)),
                            );
                        }
                    }
                    ProviderLogoState::Failed(_) => {
                        // Broken-image placeholder; no automatic retry.
                        ui.label(egui::RichText::new("🖼").size(18.0).color(palette.faint_text));
                    }
                    ProviderLogoState::NotRequested | ProviderLogoState::Loading => {
                        ui.add(egui::Spinner::new().size(18.0));
                    }
                }
            });
    }

    fn show_confirmation_step(&mut self, ui: &mut egui::Ui, palette: &StorefrontPalette) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("✔").size(36.0).color(palette.success));
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Confirm Order")
                    .size(22.0)
                    .strong()
                    .color(palette.headline_text),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(
                    "Please send your transaction receipt to our Telegram bot to verify and receive access.",
                )
                .size(13.0)
                .color(palette.muted_text),
            );
        });
        ui.add_space(10.0);

        egui::Frame::new()
            .fill(palette.card_inner_background)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Status")
                        .size(11.0)
                        .color(palette.highlight),
                );
                let alpha = pulse_alpha(ui.input(|i| i.time));
                ui.label(
                    egui::RichText::new("Please wait for us to see your transaction.")
                        .size(13.0)
                        .color(palette.headline_text.gamma_multiply(alpha)),
                );
            });

        ui.add_space(12.0);
        let telegram = egui::Button::new(
            egui::RichText::new("Send On Telegram")
                .size(15.0)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(palette.telegram)
        .corner_radius(8.0)
        .min_size(egui::vec2(ui.available_width(), 42.0));
        if ui.add(telegram).clicked() {
            ui.ctx()
                .open_url(egui::OpenUrl::new_tab(&self.instructions.verification_bot_url));
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.small(
                egui::RichText::new(format!(
                    "If your transaction does not appear within {} hours, contact us via Telegram.",
                    self.instructions.follow_up_hours
                ))
                .color(palette.faint_text),
            );
            ui.hyperlink_to(
                egui::RichText::new("Contact here").strong(),
                &self.instructions.support_contact_url,
            );
        });
    }
}

/// Responsive card layout: phone-ish, split, and full grid breakpoints.
fn grid_column_count(available_width: f32) -> usize {
    if available_width < 520.0 {
        1
    } else if available_width < 980.0 {
        2
    } else {
        4
    }
}

/// Presentation-only shimmer for the static status line.
fn pulse_alpha(time: f64) -> f32 {
    let wave = ((time * 2.0).sin() * 0.5 + 0.5) as f32;
    0.55 + 0.45 * wave
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        self.show_course_section(ctx);
        self.show_checkout_modal(ctx);

        if self.flow.is_open() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{grid_column_count, pulse_alpha};

    #[test]
    fn grid_collapses_to_one_column_on_narrow_windows() {
        assert_eq!(grid_column_count(380.0), 1);
        assert_eq!(grid_column_count(519.9), 1);
    }

    #[test]
    fn grid_uses_two_columns_at_mid_width() {
        assert_eq!(grid_column_count(520.0), 2);
        assert_eq!(grid_column_count(979.9), 2);
    }

    #[test]
    fn grid_uses_full_four_columns_on_wide_windows() {
        assert_eq!(grid_column_count(980.0), 4);
        assert_eq!(grid_column_count(1600.0), 4);
    }

    #[test]
    fn pulse_stays_within_visible_alpha_range() {
        for step in 0..64 {
            let alpha = pulse_alpha(step as f64 * 0.17);
            assert!((0.55..=1.0).contains(&alpha), "alpha was {alpha}");
        }
    }
}
