use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Palette from the site stylesheet
pub const COL_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(245, 247, 250);
pub const COL_BORDER: Color32 = Color32::from_rgb(221, 225, 230);
pub const COL_TEXT: Color32 = Color32::from_rgb(38, 50, 56);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(120, 132, 140);
pub const COL_ACCENT: Color32 = Color32::from_rgb(255, 144, 18);
pub const COL_LINK: Color32 = Color32::from_rgb(33, 150, 211);
pub const COL_DANGER: Color32 = Color32::from_rgb(211, 47, 47);

// Page title band
pub const COL_TITLE_BAND: Color32 = Color32::from_rgb(44, 62, 80);
pub const COL_TITLE_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
pub const TITLE_BAND_HEIGHT: f32 = 56.0;

// Floating tip callout
pub const COL_TIP_BG: Color32 = Color32::from_rgb(255, 248, 225);
pub const COL_TIP_BORDER: Color32 = Color32::from_rgb(255, 213, 79);

// Code blocks
pub const COL_CODE_BG: Color32 = Color32::from_rgb(39, 40, 34);
pub const COL_CODE_TEXT: Color32 = Color32::from_rgb(248, 248, 242);

// Branded chat button
pub const COL_SLACK: Color32 = Color32::from_rgb(74, 21, 75);

pub const BODY_PADDING: f32 = 24.0;

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;
    visuals.hyperlink_color = COL_LINK;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, COL_TEXT);
    visuals.widgets.inactive.bg_fill = COL_BG_DARK;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.1);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
