use eframe::egui::{Color32, Stroke, Visuals};

use crate::config::Theme;

// Nord palette
const NORD0: Color32 = Color32::from_rgb(0x2e, 0x34, 0x40);
const NORD1: Color32 = Color32::from_rgb(0x3b, 0x42, 0x52);
const NORD2: Color32 = Color32::from_rgb(0x43, 0x4c, 0x5e);
const NORD3: Color32 = Color32::from_rgb(0x4c, 0x56, 0x6a);
const NORD4: Color32 = Color32::from_rgb(0xd8, 0xde, 0xe9);
const NORD5: Color32 = Color32::from_rgb(0xe5, 0xe9, 0xf0);
const NORD6: Color32 = Color32::from_rgb(0xec, 0xef, 0xf4);
const NORD8: Color32 = Color32::from_rgb(0x88, 0xc0, 0xd0);
const NORD10: Color32 = Color32::from_rgb(0x5e, 0x81, 0xac);
const NORD11: Color32 = Color32::from_rgb(0xbf, 0x61, 0x6a);

pub fn visuals(theme: Theme) -> Visuals {
    match theme {
        Theme::NordDark => nord_dark(),
        Theme::NordLight => nord_light(),
    }
}

fn nord_dark() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(NORD4);
    visuals.panel_fill = NORD0;
    visuals.window_fill = NORD1;
    visuals.faint_bg_color = NORD1;
    visuals.extreme_bg_color = Color32::from_rgb(0x24, 0x29, 0x33);
    visuals.hyperlink_color = NORD8;
    visuals.error_fg_color = NORD11;
    visuals.selection.bg_fill = NORD10;
    visuals.selection.stroke = Stroke::new(1.0, NORD6);

    visuals.widgets.noninteractive.bg_fill = NORD1;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, NORD2);
    visuals.widgets.inactive.bg_fill = NORD2;
    visuals.widgets.inactive.weak_bg_fill = NORD2;
    visuals.widgets.hovered.bg_fill = NORD3;
    visuals.widgets.hovered.weak_bg_fill = NORD3;
    visuals.widgets.active.bg_fill = NORD10;
    visuals.widgets.active.weak_bg_fill = NORD10;
    visuals
}

fn nord_light() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.override_text_color = Some(NORD0);
    visuals.panel_fill = NORD6;
    visuals.window_fill = NORD5;
    visuals.faint_bg_color = NORD5;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.hyperlink_color = NORD10;
    visuals.error_fg_color = NORD11;
    visuals.selection.bg_fill = NORD8;
    visuals.selection.stroke = Stroke::new(1.0, NORD0);

    visuals.widgets.noninteractive.bg_fill = NORD5;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, NORD4);
    visuals.widgets.inactive.bg_fill = NORD4;
    visuals.widgets.inactive.weak_bg_fill = NORD4;
    visuals.widgets.hovered.bg_fill = NORD5;
    visuals.widgets.hovered.weak_bg_fill = NORD5;
    visuals.widgets.active.bg_fill = NORD8;
    visuals.widgets.active.weak_bg_fill = NORD8;
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_uses_polar_night_panels() {
        let visuals = visuals(Theme::NordDark);
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, NORD0);
        assert_eq!(visuals.error_fg_color, NORD11);
    }

    #[test]
    fn light_theme_uses_snow_storm_panels() {
        let visuals = visuals(Theme::NordLight);
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, NORD6);
        assert_eq!(visuals.override_text_color, Some(NORD0));
    }
}
