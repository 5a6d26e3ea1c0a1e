//! Localization
//!
//! Thin wrapper over `rust_i18n`. Display strings live under `locales/`;
//! everything else treats lookup as an opaque key-to-string function.

/// Set the startup locale
pub fn init() {
    rust_i18n::set_locale("en");
    tracing::debug!("Locale initialized to en");
}

#[cfg(test)]
mod tests {
    use rust_i18n::t;

    #[test]
    fn test_init_sets_locale_and_resolves_keys() {
        super::init();
        assert_eq!(rust_i18n::locale().to_string(), "en");
        assert_eq!(t!("hero.note_to_self"), "Note to Self");
    }
}
