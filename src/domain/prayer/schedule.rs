//! A day's prayer timings as reported by the provider.

use std::collections::BTreeMap;

use super::Prayer;
use crate::domain::foundation::ValidationError;

/// Timings keyed by the provider's names, values passed through verbatim.
///
/// Non-canonical keys (`Imsak`, `Midnight`, ...) are kept; renderers decide
/// what to show. Every canonical prayer is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSchedule {
    timings: BTreeMap<String, String>,
}

impl PrayerSchedule {
    /// Builds a schedule, failing if any canonical prayer is missing.
    pub fn from_timings(timings: BTreeMap<String, String>) -> Result<Self, ValidationError> {
        if let Some(missing) = Prayer::ALL.iter().find(|p| !timings.contains_key(p.key())) {
            return Err(ValidationError::empty_field(missing.key()));
        }
        Ok(Self { timings })
    }

    /// Time string for a canonical prayer.
    pub fn time_for(&self, prayer: Prayer) -> &str {
        // from_timings guarantees every canonical key
        self.timings.get(prayer.key()).map(String::as_str).unwrap_or_default()
    }

    /// Canonical entries in display order.
    pub fn canonical_entries(&self) -> impl Iterator<Item = (Prayer, &str)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.time_for(p)))
    }

    /// Raw lookup by provider key, including non-canonical keys.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.timings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_timings() -> BTreeMap<String, String> {
        [
            ("Fajr", "05:00"),
            ("Sunrise", "06:30"),
            ("Dhuhr", "12:15"),
            ("Asr", "15:45"),
            ("Maghrib", "18:20"),
            ("Isha", "19:50"),
            ("Imsak", "04:50"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn keeps_non_canonical_keys() {
        let schedule = PrayerSchedule::from_timings(full_timings()).unwrap();
        assert_eq!(schedule.raw("Imsak"), Some("04:50"));
        assert_eq!(schedule.len(), 7);
    }

    #[test]
    fn canonical_entries_are_ordered() {
        let schedule = PrayerSchedule::from_timings(full_timings()).unwrap();
        let prayers: Vec<_> = schedule.canonical_entries().map(|(p, _)| p).collect();
        assert_eq!(prayers, Prayer::ALL.to_vec());
    }

    #[test]
    fn times_pass_through_verbatim() {
        let mut timings = full_timings();
        timings.insert("Isha".to_string(), "19:50 (EST)".to_string());
        let schedule = PrayerSchedule::from_timings(timings).unwrap();
        assert_eq!(schedule.time_for(Prayer::Isha), "19:50 (EST)");
    }

    #[test]
    fn rejects_missing_canonical_prayer() {
        let mut timings = full_timings();
        timings.remove("Asr");
        let err = PrayerSchedule::from_timings(timings).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("Asr"));
    }
}
