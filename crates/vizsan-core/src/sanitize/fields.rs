use serde_json::{Map, Value};

use crate::sanitize::coerce;
use crate::sanitize::stats::SanitizeStats;

/// Field reader over one raw mapping.
///
/// Each accessor coerces a single field and records an omission when the key
/// was present but its value did not survive coercion. Absent keys are not
/// omissions.
pub(crate) struct Fields<'a> {
    raw: &'a Map<String, Value>,
    stats: &'a mut SanitizeStats,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(raw: &'a Map<String, Value>, stats: &'a mut SanitizeStats) -> Self {
        Self { raw, stats }
    }

    pub(crate) fn read<T>(
        &mut self,
        key: &str,
        coerce: impl FnOnce(&Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.raw.get(key)?;
        let out = coerce(value);
        if out.is_none() {
            self.stats.fields_omitted += 1;
        }
        out
    }

    pub(crate) fn number(&mut self, key: &str) -> Option<f64> {
        self.read(key, coerce::number)
    }

    pub(crate) fn text(&mut self, key: &str) -> Option<String> {
        self.read(key, coerce::text)
    }

    pub(crate) fn number_list(&mut self, key: &str) -> Option<Vec<f64>> {
        self.read(key, coerce::number_list)
    }

    /// Flat coordinate list. A partially valid list is dropped whole; so is
    /// one with an odd element count.
    pub(crate) fn points(&mut self, key: &str) -> Option<Vec<f64>> {
        self.read(key, |v| {
            coerce::number_list(v).filter(|points| points.len() % 2 == 0)
        })
    }
}
