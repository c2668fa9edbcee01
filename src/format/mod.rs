//! Markdown formatters: pure transforms from record lists to display text.

use crate::models::{CourseRecord, JobRecord, ToolRecord};

/// Descriptions longer than this are truncated with a trailing ellipsis.
const MAX_DESCRIPTION_CHARS: usize = 150;

/// Truncate a description for display.
fn truncate_description(description: &str) -> String {
    let mut chars = description.char_indices();
    match chars.nth(MAX_DESCRIPTION_CHARS) {
        Some((idx, _)) => format!("{}...", &description[..idx]),
        None => description.to_string(),
    }
}

/// Format tool records for chat display.
pub fn tools_to_markdown(tools: &[ToolRecord]) -> String {
    if tools.is_empty() {
        return "No AI tools found.".to_string();
    }

    let mut markdown = String::from("## AI Tools Recommendations\n\n");
    for (i, tool) in tools.iter().enumerate() {
        markdown.push_str(&format!("### {}. {}\n", i + 1, tool.title));
        if !tool.description.is_empty() {
            markdown.push_str(&format!(
                "**Description:** {}\n",
                truncate_description(&tool.description)
            ));
        }
        markdown.push_str(&format!("**Link:** [Visit Website]({})\n\n", tool.url));
    }
    markdown
}

/// Format job records for chat display.
pub fn jobs_to_markdown(jobs: &[JobRecord]) -> String {
    if jobs.is_empty() {
        return "No jobs found.".to_string();
    }

    let mut markdown = String::from("## Job Search Results\n\n");
    for (i, job) in jobs.iter().enumerate() {
        markdown.push_str(&format!("### {}. {}\n", i + 1, job.title));
        markdown.push_str(&format!("**Company:** {}\n", job.company));
        if !job.location.is_empty() {
            markdown.push_str(&format!("**Location:** {}\n", job.location));
        }
        if !job.description.is_empty() {
            markdown.push_str(&format!(
                "**Description:** {}\n",
                truncate_description(&job.description)
            ));
        }
        markdown.push_str(&format!("**Link:** [Apply Here]({})\n\n", job.link));
    }
    markdown
}

/// Format course records for chat display.
pub fn courses_to_markdown(courses: &[CourseRecord]) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }

    let mut markdown = String::from("## Course Recommendations\n\n");
    for (i, course) in courses.iter().enumerate() {
        markdown.push_str(&format!("### {}. {}\n", i + 1, course.title));
        if !course.provider.is_empty() {
            markdown.push_str(&format!("**Instructor/Provider:** {}\n", course.provider));
        }
        if !course.platform.is_empty() {
            markdown.push_str(&format!("**Platform:** {}\n", course.platform));
        }
        markdown.push_str(&format!("**Link:** [View Course]({})\n\n", course.url));
    }
    markdown
}
