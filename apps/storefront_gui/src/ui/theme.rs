//! Storefront palette and egui visuals.

use catalog::Tier;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub accent_color: egui::Color32,
    pub panel_rounding: u8,
}

impl ThemeSettings {
    pub fn storefront_default() -> Self {
        Self {
            accent_color: egui::Color32::from_rgb(255, 26, 26),
            panel_rounding: 12,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StorefrontPalette {
    pub page_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_inner_background: egui::Color32,
    pub card_stroke: egui::Color32,
    pub headline_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,
    pub faint_text: egui::Color32,
    pub highlight: egui::Color32,
    pub success: egui::Color32,
    pub telegram: egui::Color32,
    pub disabled_fill: egui::Color32,
    pub disabled_text: egui::Color32,
}

pub fn storefront_palette() -> StorefrontPalette {
    StorefrontPalette {
        page_background: egui::Color32::from_rgb(5, 5, 6),
        card_background: egui::Color32::from_rgb(15, 15, 15),
        card_inner_background: egui::Color32::from_rgb(10, 10, 10),
        card_stroke: egui::Color32::from_rgb(31, 34, 41),
        headline_text: egui::Color32::from_rgb(245, 245, 245),
        body_text: egui::Color32::from_rgb(209, 213, 219),
        muted_text: egui::Color32::from_rgb(156, 163, 175),
        faint_text: egui::Color32::from_rgb(107, 114, 128),
        highlight: egui::Color32::from_rgb(250, 204, 21),
        success: egui::Color32::from_rgb(34, 197, 94),
        telegram: egui::Color32::from_rgb(0, 136, 204),
        disabled_fill: egui::Color32::from_rgb(31, 41, 55),
        disabled_text: egui::Color32::from_rgb(107, 114, 128),
    }
}

/// Per-tier accent used for strokes, checkmarks, and the name line. Tiers
/// outside the shipped catalog fall back to a neutral slate.
pub fn tier_accent(tier: &Tier) -> egui::Color32 {
    match tier.id.as_str() {
        "standard" => egui::Color32::from_rgb(96, 165, 250),
        "vip" => egui::Color32::from_rgb(192, 132, 252),
        "vvip" => egui::Color32::from_rgb(250, 204, 21),
        "premium" => egui::Color32::from_rgb(107, 114, 128),
        _ => egui::Color32::from_rgb(148, 163, 184),
    }
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let palette = storefront_palette();
    let mut visuals = egui::Visuals::dark();

    visuals.override_text_color = None;
    visuals.window_fill = palette.card_background;
    visuals.panel_fill = palette.page_background;
    visuals.extreme_bg_color = palette.card_inner_background;
    visuals.faint_bg_color = egui::Color32::from_rgb(23, 23, 25);

    visuals.hyperlink_color = theme.accent_color;
    visuals.window_corner_radius = egui::CornerRadius::same(theme.panel_rounding);
    visuals.menu_corner_radius = egui::CornerRadius::same(theme.panel_rounding);
    visuals.window_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.active.bg_fill = theme.accent_color;
    visuals.widgets.hovered.bg_fill = theme.accent_color.gamma_multiply(0.85);

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::default_catalog;

    #[test]
    fn every_shipped_tier_has_a_dedicated_accent() {
        let fallback = egui::Color32::from_rgb(148, 163, 184);
        for tier in &default_catalog().tiers {
            assert_ne!(tier_accent(tier), fallback, "tier {}", tier.id);
        }
    }

    #[test]
    fn unknown_tier_falls_back_to_neutral_accent() {
        let mut tier = default_catalog().tiers[0].clone();
        tier.id = catalog::TierId::new("mystery");
        assert_eq!(tier_accent(&tier), egui::Color32::from_rgb(148, 163, 184));
    }
}
