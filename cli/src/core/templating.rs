//! # Page Templating
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders the single-page demo served by `floodalert srv`. The page is a
//! Tera template compiled into the binary (`cli/templates/index.html.tera`),
//! so the server needs no files besides the model artifact.
//!
//! The page itself is static apart from its context: title block, the
//! checklist items and the footers. Predictions and chat replies are fetched
//! from the JSON endpoints by the page's script.
//!
use crate::checklist::{self, ChecklistItem};
use crate::core::error::{FloodAlertError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html.tera");

pub const PAGE_TITLE: &str = "Smart Flood Alert System";
pub const PAGE_SUBTITLE: &str = "AI-Powered Prediction + Suraksha Bot + SMS Alert";
pub const TEAM_NAME: &str = "Flood Alert Team";

/// Values the page template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub team: &'static str,
    pub checklist_title: &'static str,
    pub checklist: Vec<ChecklistItem>,
    pub chat_footer: &'static str,
    pub checklist_footer: &'static str,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            title: PAGE_TITLE,
            subtitle: PAGE_SUBTITLE,
            team: TEAM_NAME,
            checklist_title: checklist::TITLE,
            checklist: checklist::ITEMS.to_vec(),
            chat_footer: checklist::CHAT_FOOTER,
            checklist_footer: checklist::CHECKLIST_FOOTER,
        }
    }
}

/// Renders the demo page with the given context.
pub fn render_page(page: &PageContext) -> Result<String> {
    render_str(PAGE_TEMPLATE, page)
}

/// Renders any template text against a serializable context, with HTML
/// autoescaping enabled.
pub fn render_str<T: Serialize>(template: &str, context: &T) -> Result<String> {
    let tera_context = tera::Context::from_serialize(context).map_err(|e| {
        anyhow!(FloodAlertError::Template { source: e })
            .context("Failed to create Tera context for page")
    })?;
    let html = Tera::one_off(template, &tera_context, true).map_err(|e| {
        anyhow!(FloodAlertError::Template { source: e }).context("Tera rendering failed for page")
    })?;
    debug!("Rendered page ({} bytes)", html.len());
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_render_page_contains_sections() -> Result<()> {
        let html = render_page(&PageContext::default())?;
        assert!(html.contains("Smart Flood Alert System"));
        assert!(html.contains("Suraksha Bot"));
        assert!(html.contains("Predict Flood Risk"));
        assert!(html.contains("Listen to weather updates"));
        assert!(html.contains("Obey local authorities and evacuation orders"));
        assert!(html.contains("/api/predict"));
        assert!(html.contains("/api/chat"));
        Ok(())
    }

    #[test]
    fn test_render_str_escapes_html() -> Result<()> {
        let mut context = HashMap::new();
        context.insert("name", "<script>");
        let out = render_str("Hello {{ name }}", &context)?;
        assert_eq!(out, "Hello &lt;script&gt;");
        Ok(())
    }

    #[test]
    fn test_render_invalid_template_syntax() {
        let mut context = HashMap::new();
        context.insert("name", "test");
        let result = render_str("Hello {{ name", &context);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Tera rendering failed"));
    }
}
