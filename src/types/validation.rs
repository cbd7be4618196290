use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field(s): {}", .missing.join(", "))]
pub struct ValidationError {
    missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[&'static str] {
        &self.missing
    }
}

/// Collects required fields while a draft is built.
#[derive(Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    /// Absent, `null` and blank values all count as missing.
    pub(crate) fn take(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    pub(crate) fn finish<T>(self, draft: T) -> Result<T, ValidationError> {
        if self.missing.is_empty() {
            Ok(draft)
        } else {
            Err(ValidationError {
                missing: self.missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_absent_values_are_missing() {
        let mut req = Required::default();
        let a = req.take("a", Some("value".into()));
        req.take("b", None);
        req.take("c", Some("   ".into()));
        let err = req.finish(a).unwrap_err();
        assert_eq!(err.missing_fields(), &["b", "c"]);
        assert_eq!(err.to_string(), "missing required field(s): b, c");
    }

    #[test]
    fn complete_input_passes_draft_through() {
        let mut req = Required::default();
        let name = req.take("name", Some("Math".into()));
        assert_eq!(req.finish(name).unwrap(), "Math");
    }
}
