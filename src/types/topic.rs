use serde::{Deserialize, Serialize};

use super::validation::Required;
use super::{Record, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /topics` and `PUT /topics/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopicInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDraft {
    pub name: String,
    pub description: String,
}

impl Record for Topic {
    type Input = TopicInput;
    type Draft = TopicDraft;

    const KIND: &'static str = "topic";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(input: TopicInput) -> Result<TopicDraft, ValidationError> {
        let mut req = Required::default();
        let name = req.take("name", input.name);
        let description = req.take("description", input.description);
        req.finish(TopicDraft { name, description })
    }

    fn create(id: String, draft: TopicDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }

    fn apply(&mut self, draft: TopicDraft) {
        self.name = draft.name;
        self.description = draft.description;
    }
}
