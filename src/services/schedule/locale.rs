use chrono::Weekday;
use serde::Deserialize;

/// Per-deployment schedule vocabulary: the seven weekday names as they
/// appear in stored schedule strings (Monday first), plus the sentinel
/// strings that mean "no schedule available".
///
/// The directory's data entry is French, so `french()` is the default; a
/// deployment storing another language loads its vocabulary from TOML:
///
/// ```
/// use agenda_cultuel::services::schedule::ScheduleLocale;
///
/// let locale = ScheduleLocale::from_toml_str(r#"
///     weekdays = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"]
///     no_schedule_markers = ["Horaires non disponibles"]
/// "#).unwrap();
/// assert_eq!(locale.weekday_name(chrono::Weekday::Sun), "Dimanche");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleLocale {
    /// Weekday names, Monday through Sunday. Matched case-sensitively.
    pub weekdays: [String; 7],
    /// Sentinel values treated as an empty schedule.
    #[serde(default)]
    pub no_schedule_markers: Vec<String>,
}

impl ScheduleLocale {
    /// French vocabulary used by the production directory.
    pub fn french() -> Self {
        Self {
            weekdays: [
                "Lundi".to_string(),
                "Mardi".to_string(),
                "Mercredi".to_string(),
                "Jeudi".to_string(),
                "Vendredi".to_string(),
                "Samedi".to_string(),
                "Dimanche".to_string(),
            ],
            no_schedule_markers: vec!["Horaires non disponibles".to_string()],
        }
    }

    /// English vocabulary for deployments storing English tokens.
    pub fn english() -> Self {
        Self {
            weekdays: [
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Wednesday".to_string(),
                "Thursday".to_string(),
                "Friday".to_string(),
                "Saturday".to_string(),
                "Sunday".to_string(),
            ],
            no_schedule_markers: vec!["No schedule available".to_string()],
        }
    }

    /// Load a vocabulary from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Resolve a weekday token against the vocabulary. Case-sensitive.
    pub fn weekday_from_name(&self, name: &str) -> Option<Weekday> {
        let index = self.weekdays.iter().position(|day| day == name)?;
        // Index 0 is Monday, matching Weekday::num_days_from_monday.
        Some(match index {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        })
    }

    /// Display name for a weekday in this vocabulary.
    pub fn weekday_name(&self, weekday: Weekday) -> &str {
        &self.weekdays[weekday.num_days_from_monday() as usize]
    }

    /// Whether the raw string is one of the "no schedule" sentinels.
    pub fn is_no_schedule_marker(&self, raw: &str) -> bool {
        self.no_schedule_markers
            .iter()
            .any(|marker| marker == raw.trim())
    }
}

impl Default for ScheduleLocale {
    fn default() -> Self {
        Self::french()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_weekday_lookup() {
        let locale = ScheduleLocale::french();
        assert_eq!(locale.weekday_from_name("Dimanche"), Some(Weekday::Sun));
        assert_eq!(locale.weekday_from_name("Lundi"), Some(Weekday::Mon));
        assert_eq!(locale.weekday_from_name("Samedi"), Some(Weekday::Sat));
    }

    #[test]
    fn test_weekday_lookup_is_case_sensitive() {
        let locale = ScheduleLocale::french();
        assert_eq!(locale.weekday_from_name("dimanche"), None);
        assert_eq!(locale.weekday_from_name("DIMANCHE"), None);
    }

    #[test]
    fn test_unknown_token_rejected() {
        let locale = ScheduleLocale::french();
        assert_eq!(locale.weekday_from_name("Sunday"), None);
        assert_eq!(locale.weekday_from_name(""), None);
    }

    #[test]
    fn test_weekday_name_round_trip() {
        let locale = ScheduleLocale::english();
        for name in locale.weekdays.clone() {
            let weekday = locale.weekday_from_name(&name).unwrap();
            assert_eq!(locale.weekday_name(weekday), name);
        }
    }

    #[test]
    fn test_no_schedule_marker_trims_whitespace() {
        let locale = ScheduleLocale::french();
        assert!(locale.is_no_schedule_marker("  Horaires non disponibles  "));
        assert!(!locale.is_no_schedule_marker("Messe - Dimanche 10:00-11:00"));
    }

    #[test]
    fn test_from_toml_str() {
        let locale = ScheduleLocale::from_toml_str(
            r#"
            weekdays = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]
            no_schedule_markers = ["Keine Zeiten"]
            "#,
        )
        .unwrap();

        assert_eq!(locale.weekday_from_name("So"), Some(Weekday::Sun));
        assert!(locale.is_no_schedule_marker("Keine Zeiten"));
    }

    #[test]
    fn test_from_toml_str_markers_default_empty() {
        let locale = ScheduleLocale::from_toml_str(
            r#"weekdays = ["a", "b", "c", "d", "e", "f", "g"]"#,
        )
        .unwrap();
        assert!(locale.no_schedule_markers.is_empty());
    }
}
