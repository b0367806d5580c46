//! Web server data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pipeline::LookupPipeline;
use crate::projection::ProjectedField;

use super::page::PageRenderer;

/// Shared state for the web server.
pub struct AppState<T, C, F> {
    pub pipeline: Arc<LookupPipeline<T, C, F>>,
    pub page: Arc<PageRenderer>,
}

impl<T, C, F> AppState<T, C, F> {
    pub fn new(pipeline: LookupPipeline<T, C, F>, page: PageRenderer) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            page: Arc::new(page),
        }
    }
}

// Manual impl: cloning the Arcs must not require the clients to be Clone.
impl<T, C, F> Clone for AppState<T, C, F> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            page: Arc::clone(&self.page),
        }
    }
}

/// Query string of `/` and `/api/lookup`.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    /// Country name as typed by the user, in Portuguese
    pub pais: Option<String>,
}

/// Data handed to the page template.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub title: &'static str,
    pub icon: &'static str,
    pub intro: &'static str,
    pub input_label: &'static str,
    /// Raw input, echoed back into the text field
    pub input: &'a str,
    /// Prepared query shown in the "searching" line
    pub searching: Option<&'a str>,
    pub flag: Option<FlagView<'a>>,
    pub flag_notice: Option<&'static str>,
    pub table: Option<TableView<'a>>,
    pub warning: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct FlagView<'a> {
    pub url: &'a str,
    pub caption: String,
    pub width: u32,
}

#[derive(Debug, Serialize)]
pub struct TableView<'a> {
    pub label_header: &'static str,
    pub value_header: &'static str,
    pub rows: &'a [ProjectedField],
}
