use serde::{Deserialize, Serialize};

use super::validation::Required;
use super::{Record, ValidationError};

pub const DEFAULT_DIFFICULTY: &str = "unknown";

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Not checked against the topics collection.
    pub topic_id: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

/// Body of `POST /skills` and `PUT /skills/{id}`.
///
/// An absent, `null` or blank `difficulty` becomes [`DEFAULT_DIFFICULTY`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillInput {
    pub name: Option<String>,
    pub topic_id: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub topic_id: String,
    pub difficulty: String,
}

impl Record for Skill {
    type Input = SkillInput;
    type Draft = SkillDraft;

    const KIND: &'static str = "skill";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(input: SkillInput) -> Result<SkillDraft, ValidationError> {
        let mut req = Required::default();
        let name = req.take("name", input.name);
        let topic_id = req.take("topicId", input.topic_id);
        req.finish(SkillDraft {
            name,
            topic_id,
            difficulty: input
                .difficulty
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(default_difficulty),
        })
    }

    fn create(id: String, draft: SkillDraft) -> Self {
        Self {
            id,
            name: draft.name,
            topic_id: draft.topic_id,
            difficulty: draft.difficulty,
        }
    }

    fn apply(&mut self, draft: SkillDraft) {
        self.name = draft.name;
        self.topic_id = draft.topic_id;
        self.difficulty = draft.difficulty;
    }
}
