use super::errors::FavoriteError;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RecipeId;

/// Storage key under which the favorite set is persisted.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered set of favorited recipe ids.
///
/// Persisted as a flat JSON array of strings. Insertion order is kept and
/// every id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<RecipeId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Decodes the persisted representation.
    ///
    /// Duplicate entries keep their first occurrence and blank entries are
    /// dropped; other entries are kept verbatim. Anything other than an
    /// array of strings is `MalformedData`.
    pub fn decode(raw: &str) -> Result<Self, FavoriteError> {
        let entries: Vec<String> =
            serde_json::from_str(raw).map_err(|e| FavoriteError::MalformedData(e.to_string()))?;

        Ok(entries
            .into_iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(RecipeId::new)
            .collect())
    }

    pub fn encode(&self) -> Result<String, FavoriteError> {
        serde_json::to_string(&self.ids)
            .map_err(|_| FavoriteError::Repository(RepositoryError::WriteFailed))
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.ids.contains(id)
    }

    /// Appends the id unless already present. Returns whether the set changed.
    pub fn insert(&mut self, id: RecipeId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes the id if present. Returns whether the set changed.
    pub fn remove(&mut self, id: &RecipeId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn ids(&self) -> &[RecipeId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<RecipeId> {
        self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<RecipeId> for FavoriteSet {
    fn from_iter<T: IntoIterator<Item = RecipeId>>(iter: T) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(set: &FavoriteSet) -> Vec<&str> {
        set.ids().iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn should_decode_empty_array_as_empty_set() {
        let set = FavoriteSet::decode("[]").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn should_decode_ids_in_persisted_order() {
        let set = FavoriteSet::decode(r#"["52772","53049","52959"]"#).unwrap();
        assert_eq!(ids(&set), vec!["52772", "53049", "52959"]);
    }

    #[test]
    fn should_drop_duplicates_and_blank_entries_when_decoding() {
        let set = FavoriteSet::decode(r#"["1"," ","2","1",""]"#).unwrap();
        assert_eq!(ids(&set), vec!["1", "2"]);
    }

    #[test]
    fn should_keep_stored_ids_verbatim_when_decoding() {
        let set = FavoriteSet::decode(r#"[" 52772 ","53049"]"#).unwrap();

        assert_eq!(ids(&set), vec![" 52772 ", "53049"]);
        assert_eq!(set.encode().unwrap(), r#"[" 52772 ","53049"]"#);
    }

    #[test]
    fn should_fail_when_payload_is_not_json() {
        let result = FavoriteSet::decode("not json at all");
        assert!(matches!(result, Err(FavoriteError::MalformedData(_))));
    }

    #[test]
    fn should_fail_when_payload_is_not_a_string_array() {
        assert!(matches!(
            FavoriteSet::decode(r#"{"favorites":["1"]}"#),
            Err(FavoriteError::MalformedData(_))
        ));
        assert!(matches!(
            FavoriteSet::decode("[1, 2]"),
            Err(FavoriteError::MalformedData(_))
        ));
    }

    #[test]
    fn should_encode_as_flat_string_array() {
        let mut set = FavoriteSet::new();
        set.insert(RecipeId::new("53049"));
        set.insert(RecipeId::new("52772"));

        assert_eq!(set.encode().unwrap(), r#"["53049","52772"]"#);
    }

    #[test]
    fn should_report_no_change_when_inserting_existing_id() {
        let mut set = FavoriteSet::new();
        assert!(set.insert(RecipeId::new("1")));
        assert!(!set.insert(RecipeId::new("1")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn should_report_no_change_when_removing_missing_id() {
        let mut set = FavoriteSet::new();
        assert!(!set.remove(&RecipeId::new("1")));
        assert!(set.is_empty());
    }

    #[test]
    fn should_keep_remaining_order_after_remove() {
        let mut set: FavoriteSet = ["a", "b", "c"].into_iter().map(RecipeId::from).collect();
        set.remove(&RecipeId::new("b"));
        assert_eq!(ids(&set), vec!["a", "c"]);
    }

    proptest! {
        #[test]
        fn insert_is_idempotent(existing in proptest::collection::vec("[0-9]{1,6}", 0..12), id in "[0-9]{1,6}") {
            let mut once: FavoriteSet = existing.iter().map(|s| RecipeId::new(s.as_str())).collect();
            once.insert(RecipeId::new(id.as_str()));
            let mut twice = once.clone();
            twice.insert(RecipeId::new(id.as_str()));

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn ids_are_always_unique(entries in proptest::collection::vec("[a-c]{1,2}", 0..30)) {
            let set: FavoriteSet = entries.iter().map(|s| RecipeId::new(s.as_str())).collect();
            let mut seen = std::collections::HashSet::new();

            prop_assert!(set.ids().iter().all(|id| seen.insert(id.clone())));
        }

        #[test]
        fn contains_follows_insert_and_remove(entries in proptest::collection::vec("[0-9]{1,4}", 0..10), id in "[0-9]{1,4}") {
            let mut set: FavoriteSet = entries.iter().map(|s| RecipeId::new(s.as_str())).collect();
            let id = RecipeId::new(id.as_str());

            set.insert(id.clone());
            prop_assert!(set.contains(&id));
            set.remove(&id);
            prop_assert!(!set.contains(&id));
        }
    }
}
