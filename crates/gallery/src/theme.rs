use leptos::logging::warn;
use widgetui::ThemeConfig;

const GALLERY_THEME_TOML: &str = include_str!("../gallery.theme.toml");

/// Theme bundled with the gallery, or the built-in theme when the bundled file is invalid.
pub fn gallery_theme() -> ThemeConfig {
    match ThemeConfig::from_toml_str(GALLERY_THEME_TOML) {
        Ok(theme) => theme,
        Err(err) => {
            warn!("gallery theme rejected, using defaults: {err}");
            ThemeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_theme_parses() {
        let theme = ThemeConfig::from_toml_str(GALLERY_THEME_TOML).expect("bundled theme");
        assert_eq!(theme.palette.info.base, "#0060df");
        assert_eq!(theme.loading.hold_ms, 1200);
    }
}
