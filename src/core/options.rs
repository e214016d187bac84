use tracing::debug;

use crate::core::params::Defaults;

/// Options as supplied by the user, with the default table already applied.
/// Nothing here is checked; see `core::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub positionals: Vec<String>,
    pub format: String,
    pub output_file: String,
    pub text: Option<String>,
    pub hide_value: bool,
    pub bar_width: i64,
    pub bar_height: i64,
    pub font_size: i64,
    pub help: bool,
    pub placeholder: String,
}

impl RawOptions {
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            positionals: Vec::new(),
            format: defaults.format.clone(),
            output_file: defaults.output_file.clone(),
            text: None,
            hide_value: defaults.hide_value,
            bar_width: defaults.bar_width,
            bar_height: defaults.bar_height,
            font_size: defaults.font_size,
            help: false,
            placeholder: defaults.placeholder_content.clone(),
        }
    }

    /// The barcode content: the first positional argument, or the placeholder
    /// when it is missing or empty.
    pub fn content(&self) -> &str {
        match self.positionals.first().filter(|c| !c.is_empty()) {
            Some(content) => {
                if self.positionals.len() > 1 {
                    debug!(
                        "Ignoring {} extra positional argument(s)",
                        self.positionals.len() - 1
                    );
                }
                content
            }
            None => {
                debug!("Using generic value of '{}' for the barcode", self.placeholder);
                &self.placeholder
            }
        }
    }
}
