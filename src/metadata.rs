use crate::converter::utils::python_list_literal;

pub(crate) const DEFAULT_AUTHOR: &str = "Neo & Zejzl";
pub(crate) const DEFAULT_PUBLISHED: &str = "2026-02-06";

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostMetadata {
    pub title: String,
    pub author: String,
    /// kept as written, not parsed as a date
    pub published: String,
    pub tags: Vec<String>,
}

impl PostMetadata {
    pub fn tags_literal(&self) -> String {
        python_list_literal(&self.tags)
    }
}
