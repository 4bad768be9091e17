pub const MIN_HOURS_ADVANCE_KEY: &str = "min_hours_advance";
pub const MAX_ACTIVE_RESERVATIONS_KEY: &str = "max_active_reservations";

const DEFAULT_MIN_HOURS_ADVANCE: i64 = 12;
const DEFAULT_MAX_ACTIVE_RESERVATIONS: i64 = 5;

/// Business parameters in effect for a single booking attempt. Resolved fresh
/// per attempt and never cached as mutable process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessSettings {
    pub min_hours_advance: i64,
    pub max_active_reservations: i64,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            min_hours_advance: DEFAULT_MIN_HOURS_ADVANCE,
            max_active_reservations: DEFAULT_MAX_ACTIVE_RESERVATIONS,
        }
    }
}

impl BusinessSettings {
    /// Folds raw key/value entries into usable settings. A missing key, an
    /// unparsable value, or a value outside its legal range keeps the default,
    /// so resolution always yields something bookable against.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut settings = Self::default();
        for (key, value) in entries {
            match key {
                MIN_HOURS_ADVANCE_KEY => {
                    if let Ok(hours) = value.trim().parse::<i64>() {
                        if hours >= 0 {
                            settings.min_hours_advance = hours;
                        }
                    }
                }
                MAX_ACTIVE_RESERVATIONS_KEY => {
                    if let Ok(quota) = value.trim().parse::<i64>() {
                        if quota >= 1 {
                            settings.max_active_reservations = quota;
                        }
                    }
                }
                _ => {}
            }
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entries_fall_back_to_defaults() {
        let settings = BusinessSettings::from_entries([]);
        assert_eq!(settings.min_hours_advance, 12);
        assert_eq!(settings.max_active_reservations, 5);
    }

    #[test]
    fn known_keys_override_defaults() {
        let settings = BusinessSettings::from_entries([
            (MIN_HOURS_ADVANCE_KEY, "24"),
            (MAX_ACTIVE_RESERVATIONS_KEY, "3"),
        ]);
        assert_eq!(settings.min_hours_advance, 24);
        assert_eq!(settings.max_active_reservations, 3);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let settings = BusinessSettings::from_entries([
            (MIN_HOURS_ADVANCE_KEY, "soon"),
            (MAX_ACTIVE_RESERVATIONS_KEY, ""),
        ]);
        assert_eq!(settings, BusinessSettings::default());
    }

    #[test]
    fn out_of_range_values_keep_defaults() {
        let settings = BusinessSettings::from_entries([
            (MIN_HOURS_ADVANCE_KEY, "-1"),
            (MAX_ACTIVE_RESERVATIONS_KEY, "0"),
        ]);
        assert_eq!(settings, BusinessSettings::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings = BusinessSettings::from_entries([("theme", "dark")]);
        assert_eq!(settings, BusinessSettings::default());
    }
}
