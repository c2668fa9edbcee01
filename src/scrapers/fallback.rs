//! Static fallback data: the last tier of the tools and courses cascades.

use crate::models::{CourseRecord, ToolRecord};

/// Static AI tool set returned when every live tier comes back empty.
pub fn mock_tools(limit: usize) -> Vec<ToolRecord> {
    let tools = [
        (
            "ChatGPT",
            "https://chat.openai.com/",
            "OpenAI's conversational AI assistant.",
        ),
        (
            "Claude",
            "https://claude.ai/",
            "Anthropic's helpful AI assistant.",
        ),
        (
            "Midjourney",
            "https://www.midjourney.com/",
            "AI-powered image generation platform.",
        ),
        (
            "DALL·E",
            "https://openai.com/dall-e-2/",
            "OpenAI's AI image generator.",
        ),
        (
            "Notion AI",
            "https://www.notion.so/product/ai",
            "AI-powered productivity and writing assistant.",
        ),
        (
            "Jasper",
            "https://www.jasper.ai/",
            "AI content and marketing platform.",
        ),
        (
            "Copy.ai",
            "https://www.copy.ai/",
            "AI-powered content and copywriting tool.",
        ),
    ];

    tools
        .iter()
        .take(limit)
        .map(|(title, url, description)| ToolRecord {
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// The fixed platform set behind course fallback links.
/// (name, search URL template, logo)
const COURSE_PLATFORMS: &[(&str, &str, &str)] = &[
    (
        "Coursera",
        "https://www.coursera.org/search?query={query}",
        "https://d3njjcbhbojbot.cloudfront.net/web/images/favicons/favicon-v2-96x96.png",
    ),
    (
        "Udemy",
        "https://www.udemy.com/courses/search/?q={query}",
        "https://www.udemy.com/staticx/udemy/images/v7/logo-udemy.svg",
    ),
    (
        "edX",
        "https://www.edx.org/search?q={query}",
        "https://www.edx.org/images/logos/edx-logo-elm.svg",
    ),
    (
        "Khan Academy",
        "https://www.khanacademy.org/search?page_search_query={query}",
        "https://cdn.kastatic.org/images/khan-logo-vertical-transparent.png",
    ),
    (
        "MIT OCW",
        "https://ocw.mit.edu/search/?q={query}",
        "https://ocw.mit.edu/images/mit_logo.png",
    ),
];

/// Per-platform search links returned when no live course matches.
pub fn platform_links(query: &str, limit: usize) -> Vec<CourseRecord> {
    COURSE_PLATFORMS
        .iter()
        .take(limit)
        .map(|(name, template, logo)| CourseRecord {
            title: format!("Search {} for {}", name, query),
            provider: name.to_string(),
            platform: name.to_string(),
            url: template.replace("{query}", query),
            logo: Some(logo.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tools_capped_at_limit() {
        assert_eq!(mock_tools(3).len(), 3);
        assert_eq!(mock_tools(100).len(), 7);
        assert!(mock_tools(0).is_empty());
    }

    #[test]
    fn test_mock_tool_titles_unique() {
        let tools = mock_tools(7);
        let mut titles: Vec<_> = tools.iter().map(|t| t.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 7);
    }

    #[test]
    fn test_platform_links_interpolate_query() {
        let links = platform_links("rust", 5);
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].title, "Search Coursera for rust");
        assert!(links[0].url.contains("query=rust"));
        assert!(links.iter().all(|c| c.logo.is_some()));
    }

    #[test]
    fn test_platform_links_capped() {
        assert_eq!(platform_links("rust", 2).len(), 2);
        assert!(platform_links("rust", 0).is_empty());
    }
}
