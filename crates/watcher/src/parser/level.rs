//! Level — localized display labels for server logging levels.
//!
//! The server's logging subsystem emits `java.util.logging` level names
//! (SEVERE, WARNING, INFO, ...). The display label table is chosen once at
//! construction from an explicitly passed locale tag; ambient process
//! state is never consulted or mutated. Unknown tokens pass through
//! unchanged.

type LevelTable = [(&'static str, &'static str); 8];

const LEVELS_EN: LevelTable = [
    ("ALL", "All"),
    ("CONFIG", "Config"),
    ("FINE", "Fine"),
    ("FINER", "Finer"),
    ("FINEST", "Finest"),
    ("INFO", "Info"),
    ("SEVERE", "Severe"),
    ("WARNING", "Warning"),
];

const LEVELS_FR: LevelTable = [
    ("ALL", "Tout"),
    ("CONFIG", "Config"),
    ("FINE", "Précis"),
    ("FINER", "Plus précis"),
    ("FINEST", "Le plus précis"),
    ("INFO", "Infos"),
    ("SEVERE", "Grave"),
    ("WARNING", "Avertissement"),
];

const LEVELS_DE: LevelTable = [
    ("ALL", "Alle"),
    ("CONFIG", "Konfiguration"),
    ("FINE", "Fein"),
    ("FINER", "Feiner"),
    ("FINEST", "Am feinsten"),
    ("INFO", "Information"),
    ("SEVERE", "Schwerwiegend"),
    ("WARNING", "Warnung"),
];

const LEVELS_ES: LevelTable = [
    ("ALL", "Todo"),
    ("CONFIG", "Configuración"),
    ("FINE", "Detallado"),
    ("FINER", "Más detallado"),
    ("FINEST", "El más detallado"),
    ("INFO", "Información"),
    ("SEVERE", "Grave"),
    ("WARNING", "Advertencia"),
];

/// Maps raw level tokens to display labels for one locale.
#[derive(Debug, Clone)]
pub struct LevelLocalizer {
    table: &'static LevelTable,
}

impl LevelLocalizer {
    /// Build the lookup table for `locale`, an IETF-style language tag
    /// ("fr", "de-AT", "es_MX", ...). Only the primary subtag is
    /// considered; unsupported languages fall back to English.
    pub fn new(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let table = match primary.as_str() {
            "fr" => &LEVELS_FR,
            "de" => &LEVELS_DE,
            "es" => &LEVELS_ES,
            _ => &LEVELS_EN,
        };
        Self { table }
    }

    /// Display label for a raw level token. Unrecognized tokens are
    /// returned unchanged.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.table
            .iter()
            .find(|(raw, _)| *raw == token)
            .map(|(_, label)| *label)
            .unwrap_or(token)
    }
}

impl Default for LevelLocalizer {
    fn default() -> Self {
        Self::new("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tokens_english() {
        let localizer = LevelLocalizer::new("en");
        assert_eq!(localizer.resolve("INFO"), "Info");
        assert_eq!(localizer.resolve("WARNING"), "Warning");
        assert_eq!(localizer.resolve("SEVERE"), "Severe");
        assert_eq!(localizer.resolve("FINEST"), "Finest");
    }

    #[test]
    fn test_resolve_unknown_token_passes_through() {
        let localizer = LevelLocalizer::new("en");
        assert_eq!(localizer.resolve("TRACE"), "TRACE");
        assert_eq!(localizer.resolve(""), "");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        // The server always emits upper-case tokens; anything else is
        // treated as unknown and passed through.
        let localizer = LevelLocalizer::new("en");
        assert_eq!(localizer.resolve("info"), "info");
    }

    #[test]
    fn test_regional_tag_selects_language() {
        let localizer = LevelLocalizer::new("fr-FR");
        assert_eq!(localizer.resolve("WARNING"), "Avertissement");
        assert_eq!(localizer.resolve("SEVERE"), "Grave");

        let localizer = LevelLocalizer::new("de_DE");
        assert_eq!(localizer.resolve("WARNING"), "Warnung");
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_english() {
        let localizer = LevelLocalizer::new("xx-YY");
        assert_eq!(localizer.resolve("INFO"), "Info");

        let localizer = LevelLocalizer::new("");
        assert_eq!(localizer.resolve("INFO"), "Info");
    }
}
