//! One-shot scrape command: run a cascade and print the results.

use console::style;

use super::super::ScrapeCategory;
use crate::format;
use crate::scrapers::{CourseScraper, JobScraper, ToolScraper};

/// Run one category's cascade and print JSON or markdown to stdout.
pub async fn cmd_scrape(
    category: ScrapeCategory,
    query: &str,
    location: &str,
    limit: usize,
    markdown: bool,
) -> anyhow::Result<()> {
    match category {
        ScrapeCategory::Tools => {
            let tools = ToolScraper::new().fetch(query, limit).await;
            report_count(tools.len(), "tools", query);
            if markdown {
                println!("{}", format::tools_to_markdown(&tools));
            } else {
                println!("{}", serde_json::to_string_pretty(&tools)?);
            }
        }
        ScrapeCategory::Jobs => {
            let jobs = JobScraper::new().fetch(query, location, limit).await;
            report_count(jobs.len(), "jobs", query);
            if markdown {
                println!("{}", format::jobs_to_markdown(&jobs));
            } else {
                println!("{}", serde_json::to_string_pretty(&jobs)?);
            }
        }
        ScrapeCategory::Courses => {
            let courses = CourseScraper::new().fetch(query, limit).await;
            report_count(courses.len(), "courses", query);
            if markdown {
                println!("{}", format::courses_to_markdown(&courses));
            } else {
                println!("{}", serde_json::to_string_pretty(&courses)?);
            }
        }
    }

    Ok(())
}

fn report_count(count: usize, noun: &str, query: &str) {
    eprintln!(
        "{} {} {} for '{}'",
        style("✓").green(),
        count,
        noun,
        query
    );
}
