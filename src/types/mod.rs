mod record;
mod skill;
mod topic;
mod validation;

pub use record::Record;
pub use skill::{Skill, SkillDraft, SkillInput, DEFAULT_DIFFICULTY};
pub use topic::{Topic, TopicDraft, TopicInput};
pub use validation::ValidationError;
