use serde::{Deserialize, Serialize};

/// Aggregate omission counters for one sanitization run.
///
/// Counts only; which field of which shape was dropped is deliberately not
/// recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeStats {
    /// Raw scene entries that were not mappings.
    pub scenes_dropped: u64,
    /// Shapes with an unknown type or a non-mapping body.
    pub shapes_dropped: u64,
    /// Animations with a missing or out-of-range `shape_index`.
    pub animations_dropped: u64,
    /// Fields present in input but absent from output.
    pub fields_omitted: u64,
    /// Scenes that had no usable `scene_id`.
    pub ids_synthesized: u64,
    /// Duplicate scene ids that received a suffix.
    pub ids_rewritten: u64,
}

impl SanitizeStats {
    /// True when the output is a faithful copy of the input's usable data.
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_clean() {
        assert!(SanitizeStats::default().is_clean());
    }

    #[test]
    fn any_counter_makes_it_unclean() {
        let setters: [fn(&mut SanitizeStats); 6] = [
            |s| s.scenes_dropped = 1,
            |s| s.shapes_dropped = 1,
            |s| s.animations_dropped = 1,
            |s| s.fields_omitted = 1,
            |s| s.ids_synthesized = 1,
            |s| s.ids_rewritten = 1,
        ];

        for set in setters {
            let mut stats = SanitizeStats::default();
            set(&mut stats);
            assert!(!stats.is_clean(), "{stats:?} reported clean");
        }
    }

    #[test]
    fn serializes_counter_names() {
        let stats = SanitizeStats {
            fields_omitted: 3,
            ..Default::default()
        };

        let json = serde_json::to_value(stats).unwrap();

        assert_eq!(json["fields_omitted"], 3);
        assert_eq!(json["ids_rewritten"], 0);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
