//! Deterministic scene identifier deduplication.
//!
//! Suffix assignment depends only on the order of scenes in the document,
//! so identical inputs always produce identical identifiers and an already
//! deduplicated list passes through untouched.

use std::collections::{HashMap, HashSet};

use crate::document::model::Scene;

/// Make every `scene_id` unique, in place.
///
/// The first occurrence of an identifier is never altered. Each later
/// occurrence becomes `{id}_{n}` with `n` starting at 2, skipping any
/// candidate that was already emitted or that occurs naturally anywhere in
/// the document, so a rewrite cannot collide with a scene further down.
///
/// Returns the number of identifiers rewritten.
pub fn dedupe_scene_ids(scenes: &mut [Scene]) -> u64 {
    let natural: HashSet<String> = scenes.iter().map(|s| s.scene_id.clone()).collect();
    let mut emitted: HashSet<String> = HashSet::with_capacity(scenes.len());
    let mut next_suffix: HashMap<String, u64> = HashMap::new();
    let mut rewritten = 0;

    for scene in scenes.iter_mut() {
        if !emitted.contains(&scene.scene_id) {
            emitted.insert(scene.scene_id.clone());
            continue;
        }

        let counter = next_suffix.entry(scene.scene_id.clone()).or_insert(2);
        let candidate = loop {
            let candidate = format!("{}_{}", scene.scene_id, counter);
            *counter += 1;
            if !natural.contains(&candidate) && !emitted.contains(&candidate) {
                break candidate;
            }
        };

        tracing::debug!(
            scene_id = %scene.scene_id,
            rewritten_to = %candidate,
            "duplicate scene id"
        );
        emitted.insert(candidate.clone());
        scene.scene_id = candidate;
        rewritten += 1;
    }

    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::MIN_SCENE_DURATION;

    fn scenes(ids: &[&str]) -> Vec<Scene> {
        ids.iter()
            .map(|id| Scene {
                scene_id: id.to_string(),
                title: None,
                duration: MIN_SCENE_DURATION,
                shapes: vec![],
                animations: vec![],
            })
            .collect()
    }

    fn ids(scenes: &[Scene]) -> Vec<&str> {
        scenes.iter().map(|s| s.scene_id.as_str()).collect()
    }

    #[test]
    fn first_occurrence_is_kept_later_ones_suffixed() {
        let mut list = scenes(&["scene_1", "scene_1", "scene_1"]);

        let rewritten = dedupe_scene_ids(&mut list);

        assert_eq!(ids(&list), vec!["scene_1", "scene_1_2", "scene_1_3"]);
        assert_eq!(rewritten, 2);
    }

    #[test]
    fn suffix_skips_identifiers_that_appear_later_in_the_document() {
        let mut list = scenes(&["a", "a", "a_2"]);

        dedupe_scene_ids(&mut list);

        assert_eq!(ids(&list), vec!["a", "a_3", "a_2"]);
    }

    #[test]
    fn counters_are_tracked_per_base_identifier() {
        let mut list = scenes(&["intro", "outro", "intro", "outro", "intro"]);

        dedupe_scene_ids(&mut list);

        assert_eq!(
            ids(&list),
            vec!["intro", "outro", "intro_2", "outro_2", "intro_3"]
        );
    }

    #[test]
    fn duplicate_of_a_natural_suffixed_id_gets_its_own_suffix() {
        let mut list = scenes(&["a", "a", "a_2", "a_2"]);

        dedupe_scene_ids(&mut list);

        assert_eq!(ids(&list), vec!["a", "a_3", "a_2", "a_2_2"]);
    }

    #[test]
    fn unique_list_is_untouched() {
        let mut list = scenes(&["x", "y", "z"]);

        assert_eq!(dedupe_scene_ids(&mut list), 0);
        assert_eq!(ids(&list), vec!["x", "y", "z"]);
    }

    #[test]
    fn deduplication_is_deterministic_and_idempotent() {
        let mut first = scenes(&["s", "s", "t", "s", "s_2"]);
        let mut second = first.clone();

        dedupe_scene_ids(&mut first);
        dedupe_scene_ids(&mut second);
        assert_eq!(ids(&first), ids(&second));

        let mut again = first.clone();
        assert_eq!(dedupe_scene_ids(&mut again), 0);
        assert_eq!(ids(&again), ids(&first));
    }
}
