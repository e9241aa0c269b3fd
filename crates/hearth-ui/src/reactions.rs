//! Reaction options offered in the action sheet header.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// One selectable reaction, e.g. `{ id: "like", icon: "👍" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionOption {
    pub id: String,
    pub icon: String,
}

impl ReactionOption {
    pub fn new(id: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
        }
    }
}

/// Ordered set of reactions supplied by configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionSet(Vec<ReactionOption>);

impl ReactionSet {
    pub fn new(options: Vec<ReactionOption>) -> Self {
        Self(options)
    }

    /// like, love, haha, wow, sad, angry.
    pub fn standard() -> Self {
        Self(vec![
            ReactionOption::new("like", "👍"),
            ReactionOption::new("love", "❤️"),
            ReactionOption::new("haha", "😂"),
            ReactionOption::new("wow", "😮"),
            ReactionOption::new("sad", "😔"),
            ReactionOption::new("angry", "😠"),
        ])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReactionOption> {
        self.0.iter()
    }

    /// Look up an option by its id.
    pub fn get(&self, id: &str) -> Option<&ReactionOption> {
        self.0.iter().find(|option| option.id == id)
    }

    /// Reject empty and duplicated ids; order is preserved.
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, option) in self.0.iter().enumerate() {
            if option.id.trim().is_empty() {
                return Err(ConfigError::EmptyReactionId(index));
            }
            if self.0[..index].iter().any(|earlier| earlier.id == option.id) {
                return Err(ConfigError::DuplicateReaction(option.id.clone()));
            }
        }
        Ok(())
    }
}

impl From<Vec<ReactionOption>> for ReactionSet {
    fn from(options: Vec<ReactionOption>) -> Self {
        Self(options)
    }
}

impl<'a> IntoIterator for &'a ReactionSet {
    type Item = &'a ReactionOption;
    type IntoIter = std::slice::Iter<'a, ReactionOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_order() {
        let ids: Vec<_> = ReactionSet::standard().iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids, ["like", "love", "haha", "wow", "sad", "angry"]);
    }

    #[test]
    fn test_get_by_id() {
        let set = ReactionSet::standard();
        assert_eq!(set.get("love").map(|o| o.icon.as_str()), Some("❤️"));
        assert!(set.get("meh").is_none());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let set = ReactionSet::new(vec![
            ReactionOption::new("like", "👍"),
            ReactionOption::new("like", "👌"),
        ]);
        assert!(matches!(
            set.validate(),
            Err(ConfigError::DuplicateReaction(id)) if id == "like"
        ));
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let set = ReactionSet::new(vec![
            ReactionOption::new("like", "👍"),
            ReactionOption::new("  ", "?"),
        ]);
        assert!(matches!(set.validate(), Err(ConfigError::EmptyReactionId(1))));
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(ReactionSet::default().validate().is_ok());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let set = ReactionSet::new(vec![ReactionOption::new("like", "👍")]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"id":"like","icon":"👍"}]"#);
    }
}
