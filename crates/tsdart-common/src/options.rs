//! Options for a single translation run.

use serde::{Deserialize, Serialize};

/// Configuration passed to the transpiler for one syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranspileOptions {
    /// File name used when reporting diagnostics.
    pub file_name: String,
    /// Logical name of the translation unit. Passed through unchanged;
    /// when non-empty a `library` directive is emitted at the top of the file.
    pub library_name: String,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        TranspileOptions {
            file_name: "input.ts".to_string(),
            library_name: String::new(),
        }
    }
}

impl TranspileOptions {
    pub fn new(file_name: impl Into<String>) -> Self {
        TranspileOptions {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_library_name(mut self, library_name: impl Into<String>) -> Self {
        self.library_name = library_name.into();
        self
    }

    /// Parse options from a JSON object such as `{"fileName": "a.ts"}`.
    /// Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
