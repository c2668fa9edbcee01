//! Record types returned by the scraping cascades.
//!
//! Every record is request-scoped: constructed during a scrape call,
//! serialized into the response, then dropped. Nothing is persisted.

use serde::{Deserialize, Serialize};

/// An AI tool listing.
///
/// `title` is the uniqueness key within a result set; cascades deduplicate
/// on exact title equality, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub link: String,
}

/// A course listing.
///
/// Live scrapes fill `platform` with free text from the page; the fallback
/// link generator draws it from the fixed platform set. `logo` is only
/// present on fallback-generated records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    pub provider: String,
    pub platform: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Content category, shared by topic extraction and document actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Jobs,
    Courses,
    AiTools,
    Other,
}

impl Category {
    /// Map an action string from the process endpoints to a category.
    /// Unrecognized actions fall back to `Other`.
    pub fn from_action(action: &str) -> Self {
        match action {
            "jobs" => Category::Jobs,
            "courses" => Category::Courses,
            "ai-tools" => Category::AiTools,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Jobs => "jobs",
            Category::Courses => "courses",
            Category::AiTools => "ai-tools",
            Category::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_action() {
        assert_eq!(Category::from_action("jobs"), Category::Jobs);
        assert_eq!(Category::from_action("courses"), Category::Courses);
        assert_eq!(Category::from_action("ai-tools"), Category::AiTools);
        assert_eq!(Category::from_action("summary"), Category::Other);
        assert_eq!(Category::from_action(""), Category::Other);
    }

    #[test]
    fn test_course_record_logo_omitted_when_absent() {
        let course = CourseRecord {
            title: "Intro to Rust".to_string(),
            provider: "Coursera".to_string(),
            platform: "Coursera".to_string(),
            url: "https://www.coursera.org/learn/rust".to_string(),
            logo: None,
        };
        let json = serde_json::to_value(&course).unwrap();
        assert!(json.get("logo").is_none());
    }
}
