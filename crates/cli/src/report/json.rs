// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::ReportFormatter;
use crate::harness::ExperimentRecord;

/// JSON format report formatter.
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, records: &[ExperimentRecord]) -> anyhow::Result<String> {
        let output = json!({ "records": records });
        if self.compact {
            Ok(serde_json::to_string(&output)?)
        } else {
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }

    fn format_empty(&self) -> String {
        r#"{"records": []}"#.to_string()
    }
}
