//! HTML page rendering.

use handlebars::{Handlebars, RenderError};

use crate::config::{
    FLAG_IMAGE_WIDTH, INPUT_LABEL, PAGE_ICON, PAGE_INTRO, PAGE_TITLE, TABLE_LABEL_HEADER,
    TABLE_VALUE_HEADER,
};
use crate::error_handling::InitializationError;
use crate::pipeline::LookupOutcome;

use super::types::{FlagView, PageView, TableView};

const TEMPLATE_NAME: &str = "index";
const TEMPLATE: &str = include_str!("index.hbs");

/// Renders the single page of the application.
///
/// Values are HTML-escaped by handlebars.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Compiles the page template.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::TemplateError` if the template does not compile.
    pub fn new() -> Result<Self, InitializationError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry
            .register_template_string(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| InitializationError::from(Box::new(e)))?;
        Ok(Self { registry })
    }

    /// Renders the page for `input` and the outcome of its submission.
    pub fn render(&self, input: &str, outcome: &LookupOutcome) -> Result<String, RenderError> {
        self.registry.render(TEMPLATE_NAME, &page_view(input, outcome))
    }
}

/// Maps a submission outcome onto what the page shows.
pub fn page_view<'a>(input: &'a str, outcome: &'a LookupOutcome) -> PageView<'a> {
    let mut view = PageView {
        title: PAGE_TITLE,
        icon: PAGE_ICON,
        intro: PAGE_INTRO,
        input_label: INPUT_LABEL,
        input,
        searching: None,
        flag: None,
        flag_notice: None,
        table: None,
        warning: outcome.warning(),
    };

    if let LookupOutcome::Fetched(report) = outcome {
        view.searching = Some(report.query.as_str());
        view.flag = report.flag_url.as_deref().map(|url| FlagView {
            url,
            caption: format!("Bandeira de {}", report.query),
            width: FLAG_IMAGE_WIDTH,
        });
        view.flag_notice = report.flag_notice();
        view.table = report.fields().map(|rows| TableView {
            label_header: TABLE_LABEL_HEADER,
            value_header: TABLE_VALUE_HEADER,
            rows: rows.as_slice(),
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MSG_COUNTRY_NOT_FOUND, MSG_FLAG_UNAVAILABLE, MSG_TRANSLATION_FAILED};
    use crate::pipeline::{CountryData, CountryReport};
    use crate::projection::ProjectedField;

    fn report(flag_url: Option<&str>, data: CountryData) -> LookupOutcome {
        LookupOutcome::Fetched(CountryReport {
            query: "Brasil".to_string(),
            english_name: "Brazil".to_string(),
            flag_url: flag_url.map(str::to_string),
            data,
        })
    }

    #[test]
    fn test_empty_page_has_prompt_only() {
        let html = PageRenderer::new()
            .unwrap()
            .render("", &LookupOutcome::Empty)
            .unwrap();
        assert!(html.contains("Mundo em Dados"));
        assert!(html.contains(INPUT_LABEL));
        assert!(!html.contains("<table"));
        assert!(!html.contains("Buscando"));
    }

    #[test]
    fn test_translation_failed_page() {
        let outcome = LookupOutcome::TranslationFailed {
            query: "Xyz".to_string(),
        };
        let html = PageRenderer::new().unwrap().render("xyz", &outcome).unwrap();
        assert!(html.contains(MSG_TRANSLATION_FAILED));
        assert!(!html.contains("Buscando"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_found_page_with_flag_and_table() {
        let outcome = report(
            Some("https://flagcdn.com/w320/br.png"),
            CountryData::Found {
                fields: vec![ProjectedField {
                    label: "Capital",
                    value: "Brasília".to_string(),
                }],
            },
        );
        let html = PageRenderer::new().unwrap().render("brasil", &outcome).unwrap();
        assert!(html.contains("Buscando informações sobre: <strong>Brasil</strong>"));
        assert!(html.contains(r#"src="https://flagcdn.com/w320/br.png""#));
        assert!(html.contains(r#"width="200""#));
        assert!(html.contains("Bandeira de Brasil"));
        assert!(html.contains("<th>Dados</th>"));
        assert!(html.contains("<td>Capital</td>"));
        assert!(html.contains("<td>Brasília</td>"));
        assert!(!html.contains(MSG_FLAG_UNAVAILABLE));
    }

    #[test]
    fn test_not_found_page_without_flag() {
        let outcome = report(None, CountryData::NotFound);
        let html = PageRenderer::new().unwrap().render("brasil", &outcome).unwrap();
        assert!(html.contains(MSG_FLAG_UNAVAILABLE));
        assert!(html.contains(MSG_COUNTRY_NOT_FOUND));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_input_is_escaped() {
        let html = PageRenderer::new()
            .unwrap()
            .render("<script>alert(1)</script>", &LookupOutcome::Empty)
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
