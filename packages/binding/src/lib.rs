#![deny(clippy::all)]

//! Node-API binding registering the XLIFF export with the host runtime.

use napi::{Error, Result, Status};
use napi_derive::napi;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use supernova_xliff::{
    DocumentationGroup, DocumentationPage, ExportOptions, ExportSession, RegistryScope,
    XliffError, XliffExport,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "supernova_xliff=info";

/// Registry shared by every export running with `registryScope: "session"`.
static SESSION: Lazy<Mutex<ExportSession>> = Lazy::new(|| Mutex::new(ExportSession::default()));

/// Export result handed back to JavaScript
#[napi(object)]
pub struct XLiffReport {
    pub document: String,
    pub unit_count: u32,
    pub warnings: Vec<String>,
}

fn invalid_arg(err: XliffError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| invalid_arg(XliffError::from(e)))
}

fn run_export(pages: Value, groups: Option<Value>, options: Option<Value>) -> Result<XliffExport> {
    let pages: Vec<DocumentationPage> = decode(pages)?;
    let groups: Vec<DocumentationGroup> = match groups {
        Some(Value::Null) | None => Vec::new(),
        Some(groups) => decode(groups)?,
    };
    let options = ExportOptions::from_value(options.unwrap_or(Value::Null)).map_err(invalid_arg)?;
    tracing::debug!(pages = pages.len(), scope = ?options.registry_scope, "export requested");

    match options.registry_scope {
        RegistryScope::Export => Ok(ExportSession::new(options).export(&pages, &groups)),
        RegistryScope::Session => {
            let mut session = SESSION.lock().unwrap_or_else(PoisonError::into_inner);
            session.set_options(options);
            Ok(session.export(&pages, &groups))
        }
    }
}

/// Build the XLIFF document for `pages`. `groups` is accepted and unused.
#[napi(js_name = "buildXLiffOutput")]
pub fn build_xliff_output(
    pages: Value,
    groups: Option<Value>,
    options: Option<Value>,
) -> Result<String> {
    Ok(run_export(pages, groups, options)?.document)
}

/// Same as `buildXLiffOutput`, also returning the unit count and duplicate-id warnings
#[napi(js_name = "buildXLiffReport")]
pub fn build_xliff_report(
    pages: Value,
    groups: Option<Value>,
    options: Option<Value>,
) -> Result<XLiffReport> {
    let export = run_export(pages, groups, options)?;
    Ok(XLiffReport {
        document: export.document,
        unit_count: export.unit_count as u32,
        warnings: export.diagnostics.iter().map(ToString::to_string).collect(),
    })
}

/// Forget every id seen by session-scoped exports
#[napi(js_name = "resetXLiffSession")]
pub fn reset_xliff_session() {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner).reset();
}

/// Install a stderr log subscriber. Returns `false` if one was already installed.
#[napi]
pub fn init_logging(filter: Option<String>) -> bool {
    let filter = filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
