//! Output formatting utilities

use crate::application::{ArticleView, DashboardView};
use crate::domain::{ArchiveYear, Article, EditorialMember, JournalProfile, OriginalityReport};

/// Format search results or related articles, one line per article
pub fn format_article_list(articles: &[&Article]) -> String {
    if articles.is_empty() {
        return "No articles found".to_string();
    }

    let mut output = String::new();
    for article in articles {
        output.push_str(&format!(
            "{}  {}  {}\n",
            article.id,
            article.publication_date.format("%d-%m-%Y"),
            article.title
        ));
    }
    output
}

/// Format the full article page
pub fn format_article(view: &ArticleView<'_>, acronym: &str, show_references: bool) -> String {
    let article = view.article;
    let mut output = String::new();

    output.push_str(&format!("{}\n", article.title));
    output.push_str(&format!("{}\n\n", article.authors.join(", ")));
    output.push_str(&format!(
        "Volume {}, Issue {}  |  Published {}\n",
        article.volume,
        article.issue,
        article.publication_date.format("%d-%m-%Y")
    ));
    output.push_str(&format!("DOI: {}\n", article.doi));
    output.push_str(&format!(
        "Views: {}  Downloads: {}  Citations: {}\n",
        article.views, article.downloads, article.citations
    ));
    if let Some(pdf) = &article.pdf_url {
        output.push_str(&format!("PDF: {}\n", pdf));
    }
    output.push_str(&format!("Keywords: {}\n\n", article.keywords.join(", ")));

    output.push_str("Abstract\n");
    output.push_str(&format!("{}\n\n", article.abstract_text));

    if show_references {
        output.push_str("References\n");
        if article.references.is_empty() {
            output.push_str("  (none)\n");
        }
        for (idx, reference) in article.references.iter().enumerate() {
            output.push_str(&format!("  [{}] {}\n", idx + 1, reference));
        }
        output.push('\n');
    }

    output.push_str("APA Citation\n");
    output.push_str(&format!("{}\n", article.apa_citation(acronym)));

    if !view.related.is_empty() {
        output.push_str("\nRelated Articles\n");
        for related in &view.related {
            output.push_str(&format!("  {}  {}\n", related.id, related.title));
        }
    }

    output
}

pub fn format_archives(archive: &[ArchiveYear<'_>]) -> String {
    if archive.is_empty() {
        return "No issues published".to_string();
    }

    let mut output = String::new();
    for year in archive {
        output.push_str(&format!("{} Issues\n", year.year));
        for issue in &year.issues {
            output.push_str(&format!("  Volume {}, Issue {}\n", issue.volume, issue.issue));
            for article in &issue.articles {
                output.push_str(&format!("    {}  {}\n", article.id, article.title));
            }
        }
    }
    output
}

pub fn format_board(profile: &JournalProfile, board: &[EditorialMember]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", profile.name, profile.acronym));
    if let Some(impact) = &profile.impact_factor {
        output.push_str(&format!("Impact Factor: {}\n", impact));
    }
    if let Some(five_year) = &profile.five_year_impact {
        output.push_str(&format!("5-Year Impact: {}\n", five_year));
    }
    if !profile.indexing_partners.is_empty() {
        output.push_str(&format!(
            "Indexed in: {}\n",
            profile.indexing_partners.join(", ")
        ));
    }

    output.push_str("\nEditorial Board\n");
    if board.is_empty() {
        output.push_str("  (no members listed)\n");
    }
    for member in board {
        output.push_str(&format!(
            "  {}, {} ({})\n",
            member.name, member.role, member.affiliation
        ));
    }
    output
}

pub fn format_dashboard(view: &DashboardView<'_>) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Submissions: {}  Under Review: {}  Published: {}\n\n",
        view.summary.submissions, view.summary.under_review, view.summary.published
    ));
    output.push_str(&format!("{}\n", view.heading()));

    if view.submissions.is_empty() {
        output.push_str("No submissions found.\n");
        return output;
    }

    for submission in &view.submissions {
        output.push_str(&format!(
            "  {}  {}  {}  [{}]\n",
            submission.id,
            submission.submitted_at.format("%d-%m-%Y"),
            submission.title,
            submission.status.label()
        ));
    }
    output
}

pub fn format_report(report: &OriginalityReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Originality Score: {:.0}/100\n", report.score));
    output.push_str(&format!(
        "Similarity: {:.0}%\n",
        report.similarity_percentage
    ));
    output.push_str(&format!("Verdict: {}\n", report.verdict()));
    if !report.is_fallback() {
        output.push_str(&format!("Originality: {}\n", report.band()));
    }
    output.push('\n');
    output.push_str(&format!("{}\n", report.analysis));

    if report.flagged_sections.is_empty() {
        if !report.is_fallback() {
            output.push_str("\nNo sections flagged.\n");
        }
    } else {
        output.push_str("\nFlagged Sections\n");
        for section in &report.flagged_sections {
            output.push_str(&format!("  \"{}\"\n    {}\n", section.text, section.reason));
        }
    }
    output
}
