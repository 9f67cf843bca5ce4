//! HTML page generator implementation.

use raqt::{
    AnswerValue, Catalog, Category, Question, Renderer, Session, overview, pedigree,
};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Path prepended to every form action and link, e.g. `/survey`.
    pub base_path: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: Some(overview::TITLE.to_string()),
            include_styles: true,
            full_document: true,
            class_prefix: "raqt".to_string(),
            base_path: String::new(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the page body.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the path that form actions and links are relative to.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into().trim_end_matches('/').to_string();
        self
    }
}

/// Renders a session as an HTML page.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&self, catalog: &Catalog, session: &Session) -> String {
        render_page(catalog, session, &self.options)
    }
}

/// Render the whole page for a session.
pub fn render_page(catalog: &Catalog, session: &Session, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<div class=\"{prefix}-layout\">\n"));
    html.push_str(&generate_sidebar(catalog, session, options));
    html.push_str(&format!("<main class=\"{prefix}-main\">\n"));

    if let Some(title) = &options.title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    html.push_str(&generate_overview(prefix));
    html.push_str(&generate_goals(session, options));
    html.push_str(&generate_survey(catalog, session, options));
    html.push_str(&generate_pedigree(prefix));
    html.push_str(&generate_export(catalog, session, options));

    html.push_str("</main>\n</div>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Category toggles and the per-question status list.
fn generate_sidebar(catalog: &Catalog, session: &Session, options: &HtmlOptions) -> String {
    let prefix = &options.class_prefix;
    let base = &options.base_path;
    let mut html = String::new();

    html.push_str(&format!("<aside class=\"{prefix}-sidebar\">\n"));
    html.push_str(&format!(
        "  <form method=\"post\" action=\"{base}/view\" class=\"{prefix}-view-form\">\n"
    ));
    html.push_str("    <input type=\"hidden\" name=\"form\" value=\"sidebar\">\n");
    for category in catalog.categories() {
        let letter = category.letter();
        let checked = checked_attr(session.is_category_visible(letter));
        html.push_str(&format!(
            "    <div class=\"{prefix}-field {prefix}-checkbox\">\n      <input type=\"checkbox\" id=\"show-{letter}\" name=\"show_{letter}\" onchange=\"this.form.submit()\"{checked}>\n      <label for=\"show-{letter}\">{letter} {}</label>\n    </div>\n",
            escape_html(category.name())
        ));
    }
    html.push_str(&format!(
        "    <button type=\"submit\" class=\"{prefix}-submit\">Apply</button>\n"
    ));
    html.push_str("  </form>\n");

    html.push_str(&format!("  <ul class=\"{prefix}-status\">\n"));
    for (id, answer) in session.answers() {
        let (status, text) = match answer.value() {
            AnswerValue::Yes => ("success", id.to_string()),
            AnswerValue::No => ("error", id.to_string()),
            AnswerValue::NotApplicable => (
                "warning",
                format!("{id}: {}", answer.justification().unwrap_or_default()),
            ),
            AnswerValue::NotAnswered => continue,
        };
        html.push_str(&format!(
            "    <li class=\"{prefix}-status-{status}\">{}</li>\n",
            escape_html(&text)
        ));
    }
    html.push_str("  </ul>\n</aside>\n");

    html
}

fn generate_overview(prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "  <details class=\"{prefix}-expander\">\n    <summary>Overview</summary>\n"
    ));
    for paragraph in overview::INTRODUCTION.split("\n\n") {
        html.push_str(&format!("    <p>{}</p>\n", escape_html(paragraph)));
    }
    html.push_str("    <ul>\n");
    for reference in overview::REFERENCES {
        html.push_str(&format!(
            "      <li><a href=\"{}\">{}</a></li>\n",
            escape_html(reference.url),
            escape_html(reference.title)
        ));
    }
    html.push_str("    </ul>\n  </details>\n");

    html
}

fn generate_goals(session: &Session, options: &HtmlOptions) -> String {
    let prefix = &options.class_prefix;
    let base = &options.base_path;
    let mut html = String::new();

    html.push_str(&format!(
        "  <details class=\"{prefix}-expander\">\n    <summary>Risk Analysis Quality Test (RAQT)</summary>\n"
    ));
    html.push_str("    <h2>Goals of RAQT battery</h2>\n");
    html.push_str(&format!(
        "    <form method=\"post\" action=\"{base}/view\" class=\"{prefix}-view-form\">\n"
    ));
    html.push_str("      <input type=\"hidden\" name=\"form\" value=\"goals\">\n");
    for (index, (goal, checked)) in overview::GOALS.iter().zip(session.goals()).enumerate() {
        let checked = checked_attr(*checked);
        html.push_str(&format!(
            "      <div class=\"{prefix}-field {prefix}-checkbox\">\n        <input type=\"checkbox\" id=\"goal-{index}\" name=\"goal_{index}\" onchange=\"this.form.submit()\"{checked}>\n        <label for=\"goal-{index}\">{}</label>\n      </div>\n",
            escape_html(goal)
        ));
    }
    html.push_str("    </form>\n  </details>\n");

    html
}

/// The survey itself: one form per visible category.
fn generate_survey(catalog: &Catalog, session: &Session, options: &HtmlOptions) -> String {
    let prefix = &options.class_prefix;
    let mut html = String::new();

    html.push_str(&format!(
        "  <details class=\"{prefix}-expander\" open>\n    <summary>Take the survey</summary>\n"
    ));
    html.push_str(&format!("    <ul class=\"{prefix}-instructions\">\n"));
    for line in overview::INSTRUCTIONS {
        html.push_str(&format!("      <li>{}</li>\n", escape_html(line)));
    }
    html.push_str("    </ul>\n");

    for category in catalog.categories() {
        if session.is_category_visible(category.letter()) {
            html.push_str(&generate_category(catalog, category, session, options));
        }
    }

    html.push_str("  </details>\n");
    html
}

fn generate_category(
    catalog: &Catalog,
    category: &Category,
    session: &Session,
    options: &HtmlOptions,
) -> String {
    let prefix = &options.class_prefix;
    let base = &options.base_path;
    let letter = category.letter();
    let mut html = String::new();

    html.push_str(&format!(
        "    <form method=\"post\" action=\"{base}/categories/{letter}\" id=\"category-{letter}\" class=\"{prefix}-form\">\n"
    ));
    html.push_str(&format!(
        "      <h3>Category {letter}</h3>\n      <p class=\"{prefix}-category-name\">{}</p>\n",
        escape_html(category.name())
    ));

    for question in catalog.questions_in(letter) {
        html.push_str(&generate_question(question, session, prefix));
    }

    html.push_str(&format!(
        "      <button type=\"submit\" class=\"{prefix}-submit\">Submit</button>\n    </form>\n"
    ));
    html
}

/// Generate HTML for a single question.
fn generate_question(question: &Question, session: &Session, prefix: &str) -> String {
    let ind = "      ";
    let id = question.id();
    let answer = session.answers().get(id);
    let current = answer.map(|a| a.value()).unwrap_or_default();
    let answer_field = id.answer_field();

    let mut html = String::new();
    html.push_str(&format!(
        "{ind}<fieldset class=\"{prefix}-fieldset {prefix}-question\" id=\"question-{id}\">\n"
    ));
    html.push_str(&format!("{ind}  <legend><h4>{id}</h4></legend>\n"));
    html.push_str(&format!(
        "{ind}  <div class=\"{prefix}-prompt\">{}</div>\n",
        escape_html(question.prompt())
    ));

    for (idx, value) in AnswerValue::ALL.iter().enumerate() {
        let option_id = format!("{id}-{idx}");
        let checked = checked_attr(*value == current);
        html.push_str(&format!("{ind}  <div class=\"{prefix}-radio-option\">\n"));
        html.push_str(&format!(
            "{ind}    <input type=\"radio\" id=\"{option_id}\" name=\"{answer_field}\" value=\"{}\"{checked}>\n",
            escape_html(value.as_str())
        ));
        html.push_str(&format!(
            "{ind}    <label for=\"{option_id}\">{}</label>\n",
            escape_html(value.as_str())
        ));
        html.push_str(&format!("{ind}  </div>\n"));
    }

    // The reason field appears once NA has been submitted.
    if current == AnswerValue::NotApplicable {
        let reason = answer
            .and_then(|a| a.justification())
            .map(escape_html)
            .unwrap_or_default();
        let field = id.description_field();
        html.push_str(&format!("{ind}  <div class=\"{prefix}-field\">\n"));
        html.push_str(&format!(
            "{ind}    <label for=\"{field}\">Give reason</label>\n"
        ));
        html.push_str(&format!(
            "{ind}    <input type=\"text\" id=\"{field}\" name=\"{field}\" class=\"{prefix}-input\" value=\"{reason}\">\n"
        ));
        html.push_str(&format!("{ind}  </div>\n"));
    }

    html.push_str(&format!("{ind}</fieldset>\n"));
    html
}

/// Reference tables for strength-of-knowledge judgments.
fn generate_pedigree(prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "  <details class=\"{prefix}-expander\">\n    <summary>Strength of knowledge (NUSAP pedigree)</summary>\n"
    ));
    html.push_str(&format!(
        "    <p>Example NUSAP element: {}</p>\n",
        escape_html(&pedigree::NusapElement::icerisk_example().to_string())
    ));

    for matrix in pedigree::MATRICES {
        html.push_str(&format!(
            "    <table class=\"{prefix}-pedigree\">\n      <caption>{} ({})</caption>\n      <tr><th>Score</th>",
            escape_html(matrix.name),
            escape_html(matrix.source)
        ));
        for criterion in matrix.criteria {
            let marker = if criterion.important { " *" } else { "" };
            html.push_str(&format!("<th>{}{marker}</th>", escape_html(criterion.name)));
        }
        html.push_str("</tr>\n");

        for score in pedigree::SCORES {
            html.push_str(&format!("      <tr><td>{score}</td>"));
            for criterion in matrix.criteria {
                let level = criterion.level(score).unwrap_or_default();
                html.push_str(&format!("<td>{}</td>", escape_html(level)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("    </table>\n");
    }

    html.push_str("    <ul>\n");
    for example in pedigree::EXAMPLES {
        let code = example
            .code
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let levels = match example.matrix.describe(example.code) {
            Ok(levels) => levels
                .iter()
                .map(|(criterion, level)| format!("{criterion}: {level}"))
                .collect::<Vec<_>>()
                .join("; "),
            Err(err) => err.to_string(),
        };
        html.push_str(&format!(
            "      <li>{} ({}): ({code}) {}</li>\n",
            escape_html(example.name),
            escape_html(example.matrix.name),
            escape_html(&levels)
        ));
    }
    html.push_str("    </ul>\n  </details>\n");

    html
}

/// Export toggles and, when enabled, the snapshot text.
fn generate_export(catalog: &Catalog, session: &Session, options: &HtmlOptions) -> String {
    let prefix = &options.class_prefix;
    let base = &options.base_path;
    let mut html = String::new();

    html.push_str(&format!(
        "  <section class=\"{prefix}-export\" id=\"export\">\n    <form method=\"post\" action=\"{base}/view\" class=\"{prefix}-view-form\">\n"
    ));
    html.push_str("      <input type=\"hidden\" name=\"form\" value=\"export\">\n");
    html.push_str(&format!(
        "      <div class=\"{prefix}-field {prefix}-checkbox\">\n        <input type=\"checkbox\" id=\"export-toggle\" name=\"export\" onchange=\"this.form.submit()\"{}>\n        <label for=\"export-toggle\">Download survey</label>\n      </div>\n",
        checked_attr(session.export_enabled())
    ));

    if session.export_enabled() {
        html.push_str(&format!(
            "      <div class=\"{prefix}-field {prefix}-checkbox\">\n        <input type=\"checkbox\" id=\"include-questions\" name=\"include_questions\" onchange=\"this.form.submit()\"{}>\n        <label for=\"include-questions\">Include questions</label>\n      </div>\n",
            checked_attr(session.include_questions())
        ));
    }
    html.push_str("    </form>\n");

    if session.export_enabled() {
        let text = session
            .snapshot(catalog)
            .to_json_pretty()
            .unwrap_or_else(|err| format!("export failed: {err}"));
        html.push_str(&format!(
            "    <pre class=\"{prefix}-snapshot\">{}</pre>\n",
            escape_html(&text)
        ));
        html.push_str(&format!(
            "    <a href=\"{base}/export?include_questions={}\" download=\"raqt-survey.json\">Download JSON</a>\n",
            session.include_questions()
        ));
    }

    html.push_str("  </section>\n");
    html
}

fn checked_attr(checked: bool) -> &'static str {
    if checked { " checked" } else { "" }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-layout {{
      display: flex;
      gap: 1.5rem;
      font-family: sans-serif;
    }}
    .{prefix}-sidebar {{
      flex: 0 0 18rem;
      padding: 1rem;
      background: #f5f5f5;
    }}
    .{prefix}-main {{
      flex: 1;
      max-width: 60rem;
      padding: 1rem;
    }}
    .{prefix}-expander {{
      margin: 1rem 0;
      padding: 0.5rem;
      border: 1px solid #ddd;
    }}
    .{prefix}-expander summary {{
      cursor: pointer;
      font-weight: bold;
    }}
    .{prefix}-prompt {{
      white-space: pre-wrap;
      margin: 0.5rem 0;
    }}
    .{prefix}-field {{
      margin: 0.5rem 0;
    }}
    .{prefix}-input {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-checkbox {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }}
    .{prefix}-fieldset {{
      margin: 1rem 0;
      padding: 1rem;
    }}
    .{prefix}-radio-option {{
      display: inline-block;
      margin-right: 1rem;
    }}
    .{prefix}-status {{
      list-style: none;
      padding: 0;
    }}
    .{prefix}-status li {{
      margin: 0.25rem 0;
      padding: 0.25rem 0.5rem;
    }}
    .{prefix}-status-success {{
      background: #dff0d8;
    }}
    .{prefix}-status-error {{
      background: #f2dede;
    }}
    .{prefix}-status-warning {{
      background: #fcf8e3;
    }}
    .{prefix}-pedigree {{
      border-collapse: collapse;
      margin: 1rem 0;
    }}
    .{prefix}-pedigree td, .{prefix}-pedigree th {{
      border: 1px solid #ccc;
      padding: 0.25rem 0.5rem;
    }}
    .{prefix}-snapshot {{
      white-space: pre-wrap;
      background: #f5f5f5;
      padding: 0.5rem;
    }}
    .{prefix}-submit {{
      margin-top: 1rem;
      padding: 0.5rem 1rem;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use raqt::{SurveyEvent, aqt};

    fn fragment(session: &Session) -> String {
        render_page(aqt(), session, &HtmlOptions::new().full_document(false))
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("Test Survey")
            .with_styles(false)
            .full_document(true)
            .with_class_prefix("my-form")
            .with_base_path("/survey/");

        assert_eq!(options.title, Some("Test Survey".to_string()));
        assert!(!options.include_styles);
        assert!(options.full_document);
        assert_eq!(options.class_prefix, "my-form");
        assert_eq!(options.base_path, "/survey");
    }

    #[test]
    fn one_form_per_category() {
        let html = fragment(&Session::new());
        for category in aqt().categories() {
            let action = format!("action=\"/categories/{}\"", category.letter());
            assert!(html.contains(&action), "missing form for {}", category.letter());
        }
        assert_eq!(html.matches("type=\"radio\"").count(), aqt().len() * 4);
    }

    #[test]
    fn not_answered_is_checked_by_default() {
        let html = fragment(&Session::new());
        assert!(html.contains("name=\"A1_answer\" value=\"not answered\" checked"));
        assert!(!html.contains("name=\"A1_answer\" value=\"yes\" checked"));
    }

    #[test]
    fn hidden_category_has_no_form() {
        let mut session = Session::new();
        session.apply(SurveyEvent::ShowCategory {
            category: 'B',
            visible: false,
        });
        let html = fragment(&session);
        assert!(!html.contains("action=\"/categories/B\""));
        assert!(!html.contains("name=\"show_B\" onchange=\"this.form.submit()\" checked"));
        assert!(html.contains("action=\"/categories/C\""));
    }

    #[test]
    fn reason_field_only_for_na() {
        let mut session = Session::new();
        session.apply(SurveyEvent::SetAnswer {
            id: "G2".into(),
            value: AnswerValue::NotApplicable,
            justification: Some("<no data>".into()),
        });
        session.apply(SurveyEvent::SetAnswer {
            id: "A1".into(),
            value: AnswerValue::Yes,
            justification: None,
        });
        let html = fragment(&session);

        assert!(html.contains("name=\"G2_description\""));
        assert!(html.contains("value=\"&lt;no data&gt;\""));
        assert!(!html.contains("name=\"A1_description\""));
        assert!(html.contains("name=\"A1_answer\" value=\"yes\" checked"));
    }

    #[test]
    fn sidebar_status() {
        let mut session = Session::new();
        session.apply(SurveyEvent::SetAnswer {
            id: "A1".into(),
            value: AnswerValue::Yes,
            justification: None,
        });
        session.apply(SurveyEvent::SetAnswer {
            id: "A2".into(),
            value: AnswerValue::No,
            justification: None,
        });
        session.apply(SurveyEvent::SetAnswer {
            id: "A3".into(),
            value: AnswerValue::NotApplicable,
            justification: Some("not relevant".into()),
        });
        let html = fragment(&session);

        assert!(html.contains("<li class=\"raqt-status-success\">A1</li>"));
        assert!(html.contains("<li class=\"raqt-status-error\">A2</li>"));
        assert!(html.contains("<li class=\"raqt-status-warning\">A3: not relevant</li>"));
    }

    #[test]
    fn export_panel() {
        let mut session = Session::new();
        let html = fragment(&session);
        assert!(!html.contains("raqt-snapshot"));
        assert!(!html.contains("name=\"include_questions\""));

        session.apply(SurveyEvent::SetAnswer {
            id: "A1".into(),
            value: AnswerValue::Yes,
            justification: None,
        });
        session.apply(SurveyEvent::SetExport(true));
        let html = fragment(&session);
        assert!(html.contains("raqt-snapshot"));
        assert!(html.contains("&quot;A1&quot;: &quot;yes&quot;"));
        assert!(html.contains("name=\"include_questions\""));
        assert!(html.contains("/export?include_questions=false"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"a\" & 'b'</b>"), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
    }

    #[test]
    fn default_renderer_is_styled_page() {
        let html = HtmlRenderer::default().render(aqt(), &Session::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("class=\"raqt-layout\""));
        assert!(!html.contains("class=\"-"));
    }

    #[test]
    fn fragment_has_no_document_wrapper() {
        let html = fragment(&Session::new());
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(!html.contains("<style>"));
        assert!(html.starts_with("<div class=\"raqt-layout\">"));
        assert!(html.contains("Are key terms defined?"));
    }

    #[test]
    fn full_document_has_title_and_styles() {
        let html = HtmlRenderer::new(HtmlOptions::new()).render(aqt(), &Session::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Risk Analysis Quality Test</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Goals of RAQT battery"));
        assert!(html.contains("Funtowicz and Ravetz, 1990"));
    }

    #[test]
    fn pedigree_examples_are_described() {
        let html = fragment(&Session::new());
        assert!(html.contains(
            "research (IceRisk 1.0) (Research): (3,2,3,4) Theoretical Structure: Theory-based model; \
             Data input: Calculated data; Peer-acceptance: High; Colleague consensus: All but cranks"
        ));
    }
}
