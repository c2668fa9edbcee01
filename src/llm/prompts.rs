//! Prompt templates for topic extraction and chunked summarization.

use crate::models::Category;

/// Per-slice instruction for the chunked responder.
pub const CHUNK_INSTRUCTION: &str = "You will receive a large query in parts. For each part, \
     write a brief, information-dense summary in markdown. Keep each part's summary under 120 words.";

/// Final combining instruction for the chunked responder.
pub const COMBINE_INSTRUCTION: &str = "Combine the following part-summaries into a single concise \
     answer. Use clear sections and bullet points where helpful. Keep total under 400 words.";

fn query_subject(category: Category) -> &'static str {
    match category {
        Category::Jobs => "key job-related keywords from this query for job search",
        Category::Courses => "key learning-related keywords from this query for course search",
        Category::AiTools => "key AI tool-related keywords from this query for AI tools search",
        Category::Other => "key keywords from this query",
    }
}

fn focus_line(category: Category) -> Option<&'static str> {
    match category {
        Category::Jobs => Some("Focus on job titles, skills, technologies, or industries"),
        Category::Courses => Some("Focus on subjects, skills, technologies, or learning areas"),
        Category::AiTools => Some("Focus on AI applications, use cases, or tool types"),
        Category::Other => None,
    }
}

/// Prompt asking for 2-3 comma-separated keywords from a search query.
pub fn query_topics_prompt(query: &str, category: Category) -> String {
    let mut prompt = format!(
        "Extract 2-3 {}:\n\"{}\"\n\nReturn only the keywords separated by commas, no explanations.",
        query_subject(category),
        query
    );
    if let Some(focus) = focus_line(category) {
        prompt.push_str(&format!("\n{}.", focus));
    }
    prompt
}

/// Prompt asking for 2-3 comma-separated keywords from a document excerpt.
pub fn document_topics_prompt(sample: &str, category: Category) -> String {
    let subject = match category {
        Category::Jobs => "key job-related keywords",
        Category::Courses => "key learning-related keywords",
        Category::AiTools => "key AI tool-related keywords",
        Category::Other => "key keywords",
    };
    let mut prompt = format!(
        "Analyze this document and extract 2-3 {}:\n\"{}\"\n\nReturn only the keywords separated by commas, no explanations.",
        subject, sample
    );
    if let Some(focus) = focus_line(category) {
        prompt.push_str(&format!("\n{} mentioned.", focus));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_prompt_embeds_query() {
        let prompt = query_topics_prompt("remote rust jobs", Category::Jobs);
        assert!(prompt.contains("\"remote rust jobs\""));
        assert!(prompt.contains("job titles, skills"));
        assert!(prompt.contains("separated by commas"));
    }

    #[test]
    fn test_other_category_has_no_focus_line() {
        let prompt = query_topics_prompt("anything", Category::Other);
        assert!(!prompt.contains("Focus on"));
    }

    #[test]
    fn test_document_prompt_mentions_document() {
        let prompt = document_topics_prompt("resume text", Category::Courses);
        assert!(prompt.starts_with("Analyze this document"));
        assert!(prompt.contains("learning areas mentioned."));
    }
}
