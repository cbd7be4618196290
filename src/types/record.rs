use serde::{de::DeserializeOwned, Serialize};

use super::ValidationError;

/// A record kind stored in its own collection.
///
/// Request bodies arrive as `Input` (every field optional), are checked into
/// a `Draft` (required fields present, defaults applied) and only then turned
/// into or applied onto a record.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Input: DeserializeOwned + Send + 'static;
    type Draft;

    /// Singular name used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn validate(input: Self::Input) -> Result<Self::Draft, ValidationError>;

    fn create(id: String, draft: Self::Draft) -> Self;

    /// Replaces every mutable field. The id is left untouched.
    fn apply(&mut self, draft: Self::Draft);

    /// Case-insensitive id comparison.
    fn has_id(&self, id: &str) -> bool {
        self.id()
            .chars()
            .flat_map(char::to_lowercase)
            .eq(id.chars().flat_map(char::to_lowercase))
    }
}
