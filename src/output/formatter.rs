//! Output formatters for profile reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{ProfileScorerError, Result};
use crate::output::report::{ProfileReport, ScoreGrade};
use crate::processing::scores::CategoryScores;
use crate::processing::text_processor::ResumeHighlights;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to the formatter for the requested format.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f4f6f8; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; border-bottom: 3px solid #0a66c2; padding-bottom: 20px; }
        .badge { display: inline-block; padding: 6px 14px; border-radius: 16px; font-weight: bold; color: white; }
        .grade-excellent { background: #28a745; }
        .grade-good { background: #17a2b8; }
        .grade-fair { background: #ffc107; color: #000; }
        .grade-poor { background: #dc3545; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; }
        h2 { color: #0a66c2; border-bottom: 2px solid #e9ecef; padding-bottom: 8px; }
        .feedback { color: #555; font-size: 0.95em; }
        .metadata { margin-top: 30px; font-size: 0.85em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ title }}</h1>
            <p>Overall score: <strong>{{ overall_score }}</strong> / 100
               <span class="badge {{ grade_class }}">{{ grade_label }}</span></p>
        </div>

        <div class="section">
            <h2>Category Scores</h2>
            <table>
                <tr><th>Category</th><th>Score (of 25)</th></tr>
                {% for row in categories %}
                <tr><td>{{ row.name }}</td><td>{{ row.score }}</td></tr>
                {% endfor %}
            </table>
        </div>

        <div class="section">
            <h2>Sections</h2>
            <table>
                <tr><th>Section</th><th>Score</th><th>Feedback</th></tr>
                {% for row in sections %}
                <tr>
                    <td>{{ row.name }}</td>
                    <td>{{ row.score }}</td>
                    <td class="feedback"><ul>{% for line in row.feedback %}<li>{{ line }}</li>{% endfor %}</ul></td>
                </tr>
                {% endfor %}
            </table>
        </div>

        <div class="section">
            <h2>Recommendations</h2>
            <ol>
                {% for line in recommendations %}<li>{{ line }}</li>{% endfor %}
            </ol>
        </div>

        {% if !suggestions.is_empty() %}
        <div class="section">
            <h2>Content Ideas</h2>
            <ul>
                {% for line in suggestions %}<li>{{ line }}</li>{% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="metadata">
            <p>Generated {{ generated_at }} by profile-scorer v{{ version }}</p>
            <p>Source: {{ source }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    title: String,
    overall_score: String,
    grade_class: &'static str,
    grade_label: &'static str,
    categories: Vec<HtmlCategoryRow>,
    sections: Vec<HtmlSectionRow>,
    recommendations: Vec<String>,
    suggestions: Vec<String>,
    generated_at: String,
    version: String,
    source: String,
}

struct HtmlCategoryRow {
    name: &'static str,
    score: String,
}

struct HtmlSectionRow {
    name: String,
    score: String,
    feedback: Vec<String>,
}

fn category_rows(scores: &CategoryScores) -> [(&'static str, f64); 4] {
    [
        ("Completeness", scores.completeness),
        ("Relevance", scores.relevance),
        ("Impact", scores.impact),
        ("Keywords", scores.keywords),
    ]
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_grade_badge(&self, grade: ScoreGrade) -> String {
        let color = match grade {
            ScoreGrade::Excellent => Color::Green,
            ScoreGrade::Good => Color::BrightGreen,
            ScoreGrade::Fair => Color::Yellow,
            ScoreGrade::Poor => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", grade.label().color(color).bold())
        } else {
            format!("[{}]", grade.label())
        }
    }

    fn score_bar(score: f64, max: f64, width: usize) -> String {
        let filled = ((score / max) * width as f64).round().clamp(0.0, width as f64) as usize;
        format!("{}{}", "■".repeat(filled), "·".repeat(width - filled))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        let analysis = &report.analysis_results;
        let mut output = String::new();

        output.push_str(&self.format_header(&report.title().to_uppercase(), 1));
        output.push_str(&format!(
            "Generated: {} | Source: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.source
        ));

        output.push_str(&self.format_header("Overall", 2));
        output.push_str(&format!(
            "Overall Score: {:.1}/100 {}\n",
            analysis.overall_score,
            self.format_grade_badge(report.grade())
        ));

        output.push_str(&self.format_header("Categories", 3));
        for (name, score) in category_rows(&analysis.score_categories) {
            output.push_str(&format!(
                "  {:<13} {} {:>5.1}/25\n",
                name,
                self.colorize(&Self::score_bar(score, 25.0, 20), Color::Cyan),
                score
            ));
        }

        output.push_str(&self.format_header("Sections", 2));
        for (section, result) in report.ranked_sections() {
            let grade = ScoreGrade::for_score(result.score);
            let color = match grade {
                ScoreGrade::Excellent | ScoreGrade::Good => Color::Green,
                ScoreGrade::Fair => Color::Yellow,
                ScoreGrade::Poor => Color::Red,
            };
            output.push_str(&format!(
                "  {:<16} {}\n",
                title_case(section.as_str()),
                self.colorize(&format!("{:>5.1}", result.score), color)
            ));

            if self.detailed {
                for line in &result.feedback {
                    output.push_str(&format!(
                        "      • {}\n",
                        self.colorize(line, Color::BrightBlack)
                    ));
                }
            }
        }

        output.push_str(&self.format_header("Recommendations", 2));
        for (i, line) in analysis.overall_recommendations.iter().enumerate() {
            let text = if i == 0 {
                self.colorize(line, Color::Yellow)
            } else {
                line.clone()
            };
            output.push_str(&format!("{}. {}\n", i + 1, text));
        }

        if !report.content_suggestions.is_empty() {
            output.push_str(&self.format_header("Content Ideas", 2));
            for idea in &report.content_suggestions {
                output.push_str(&format!("  • {}\n", idea));
            }
        }

        output.push_str(&format!(
            "\n{} Generated by profile-scorer v{}\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.scorer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &ProfileReport) -> HtmlTemplate {
        let analysis = &report.analysis_results;
        let grade = report.grade();
        let grade_class = match grade {
            ScoreGrade::Excellent => "grade-excellent",
            ScoreGrade::Good => "grade-good",
            ScoreGrade::Fair => "grade-fair",
            ScoreGrade::Poor => "grade-poor",
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            title: report.title(),
            overall_score: format!("{:.1}", analysis.overall_score),
            grade_class,
            grade_label: grade.label(),
            categories: category_rows(&analysis.score_categories)
                .into_iter()
                .map(|(name, score)| HtmlCategoryRow {
                    name,
                    score: format!("{:.1}", score),
                })
                .collect(),
            sections: analysis
                .sections
                .iter()
                .map(|(section, result)| HtmlSectionRow {
                    name: title_case(section.as_str()),
                    score: format!("{:.1}", result.score),
                    feedback: result.feedback.clone(),
                })
                .collect(),
            recommendations: analysis.overall_recommendations.clone(),
            suggestions: report.content_suggestions.clone(),
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            version: report.metadata.scorer_version.clone(),
            source: report.metadata.source.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ProfileScorerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        let analysis = &report.analysis_results;
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", report.title()));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Source:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.source
            ));
        }

        output.push_str(&format!(
            "**Overall Score:** {:.1}/100 ({})\n\n",
            analysis.overall_score,
            report.grade().label()
        ));

        output.push_str("## Category Scores\n\n");
        output.push_str("| Category | Score |\n");
        output.push_str("|----------|-------|\n");
        for (name, score) in category_rows(&analysis.score_categories) {
            output.push_str(&format!("| {} | {:.1}/25 |\n", name, score));
        }
        output.push('\n');

        output.push_str("## Sections\n\n");
        for (section, result) in &analysis.sections {
            output.push_str(&format!(
                "### {} ({:.1})\n\n",
                title_case(section.as_str()),
                result.score
            ));
            for line in &result.feedback {
                output.push_str(&format!("- {}\n", line));
            }
            output.push('\n');
        }

        output.push_str("## Recommendations\n\n");
        for (i, line) in analysis.overall_recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, line));
        }

        if !report.content_suggestions.is_empty() {
            output.push_str("\n## Content Ideas\n\n");
            for idea in &report.content_suggestions {
                output.push_str(&format!("- {}\n", idea));
            }
        }

        output.push_str(&format!(
            "\n---\n*Generated by profile-scorer v{}*\n",
            report.metadata.scorer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::with_options(output.color_output, output.detailed, true, true, true)
    }

    pub fn generate_report(&self, report: &ProfileReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Render resume highlights for the console or as JSON.
pub fn format_highlights(highlights: &ResumeHighlights, format: OutputFormat, use_colors: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(highlights)?),
        OutputFormat::Console => {
            let console = ConsoleFormatter::new(use_colors, false);
            let groups: [(&str, &Vec<String>); 7] = [
                ("Job Titles", &highlights.job_titles),
                ("Qualifications", &highlights.qualifications),
                ("Achievements", &highlights.achievements),
                ("Traits", &highlights.traits),
                ("Skills", &highlights.skills),
                ("Projects", &highlights.projects),
                ("Publications", &highlights.publications),
            ];

            let mut output = console.format_header("RESUME HIGHLIGHTS", 1);
            for (name, items) in groups {
                output.push_str(&console.format_header(name, 3));
                if items.is_empty() {
                    output.push_str(&format!("  {}\n", console.colorize("(none found)", Color::BrightBlack)));
                }
                for item in items {
                    output.push_str(&format!("  • {}\n", item));
                }
            }
            Ok(output)
        }
        other => Err(ProfileScorerError::OutputFormatting(format!(
            "Resume highlights cannot be rendered as {:?}",
            other
        ))),
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, subject: &str, timestamp: bool) -> String {
    let base_name: String = subject
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_profile_analysis{}.{}", base_name, timestamp_suffix, extension)
}
