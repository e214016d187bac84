//! Turns `RawOptions` into a `RenderRequest`, or a `ValidationFailure` listing
//! every rule the options break. Format and extension are always both checked.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::options::RawOptions;
use crate::core::params::RenderRequest;
use crate::types::{BarcodeFormat, OutputExt};

const QR_EXTENSIONS: &[OutputExt] = &[OutputExt::Png];
const LINEAR_EXTENSIONS: &[OutputExt] = &[OutputExt::Png, OutputExt::Jpeg, OutputExt::Svg];

/// Output extensions each format can be written as.
pub fn allowed_extensions(format: BarcodeFormat) -> &'static [OutputExt] {
    match format {
        BarcodeFormat::QrCode => QR_EXTENSIONS,
        _ => LINEAR_EXTENSIONS,
    }
}

/// Lowercased text after the last `.` of the file name, if any.
/// A leading dot (`.png`) marks a hidden file, not an extension.
pub fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    UnknownFormat(String),
    UnsupportedExtension { extension: String, path: String },
    IncompatibleExtension { extension: OutputExt, format: BarcodeFormat },
    NonPositive { option: &'static str, value: i64 },
    EmptyContent,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::UnknownFormat(format) => {
                write!(f, "Specified invalid option for format: {}", format)
            }
            ValidationIssue::UnsupportedExtension { extension, path } => write!(
                f,
                "Specified invalid extension ({}) on output file: {}",
                extension, path
            ),
            ValidationIssue::IncompatibleExtension { extension, format } => {
                let allowed: Vec<&str> = allowed_extensions(*format)
                    .iter()
                    .map(OutputExt::as_str)
                    .collect();
                write!(
                    f,
                    "Extension {} is not supported for format {} (use {})",
                    extension,
                    format,
                    allowed.join(", ")
                )
            }
            ValidationIssue::NonPositive { option, value } => {
                write!(f, "Option --{} must be a positive integer, got: {}", option, value)
            }
            ValidationIssue::EmptyContent => write!(f, "Barcode content must not be empty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationFailure {
    pub issues: Vec<ValidationIssue>,
    pub help_requested: bool,
}

impl ValidationFailure {
    pub fn reasons(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() && self.help_requested {
            return write!(f, "help requested");
        }
        write!(f, "{}", self.reasons().join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

fn check_format(raw: &str, issues: &mut Vec<ValidationIssue>) -> Option<BarcodeFormat> {
    match raw.parse::<BarcodeFormat>() {
        Ok(format) => Some(format),
        Err(name) => {
            issues.push(ValidationIssue::UnknownFormat(name));
            None
        }
    }
}

fn check_extension(
    path: &str,
    format: Option<BarcodeFormat>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<OutputExt> {
    let raw_ext = extension_of(path).unwrap_or_default();
    debug!("Discovered extension '{}'", raw_ext);

    let ext = match raw_ext.parse::<OutputExt>() {
        Ok(ext) => ext,
        Err(_) => {
            issues.push(ValidationIssue::UnsupportedExtension {
                extension: raw_ext,
                path: path.to_string(),
            });
            return None;
        }
    };

    if let Some(format) = format {
        if !allowed_extensions(format).contains(&ext) {
            issues.push(ValidationIssue::IncompatibleExtension {
                extension: ext,
                format,
            });
            return None;
        }
    }
    Some(ext)
}

fn check_positive(option: &'static str, value: i64, issues: &mut Vec<ValidationIssue>) -> u32 {
    match u32::try_from(value) {
        Ok(v) if v > 0 => v,
        _ => {
            issues.push(ValidationIssue::NonPositive { option, value });
            0
        }
    }
}

pub fn validate(raw: &RawOptions) -> Result<RenderRequest, ValidationFailure> {
    debug!("Format specified: {}", raw.format);
    debug!("Output file specified: {}", raw.output_file);

    let mut issues = Vec::new();

    let format = check_format(&raw.format, &mut issues);
    let output_ext = check_extension(&raw.output_file, format, &mut issues);
    let bar_width = check_positive("width", raw.bar_width, &mut issues);
    let bar_height = check_positive("height", raw.bar_height, &mut issues);
    let font_size = check_positive("fontSize", raw.font_size, &mut issues);
    // Only reachable when a defaults file blanks the placeholder.
    if raw.content().is_empty() {
        issues.push(ValidationIssue::EmptyContent);
    }

    let (format, output_ext) = match (format, output_ext) {
        (Some(format), Some(ext)) if issues.is_empty() && !raw.help => (format, ext),
        _ => {
            return Err(ValidationFailure {
                issues,
                help_requested: raw.help,
            });
        }
    };

    // An empty label override hides the label instead of drawing nothing.
    let empty_text = raw.text.as_deref().is_some_and(str::is_empty);
    let display_value = !(raw.hide_value || empty_text);
    let label_text = raw.text.clone().filter(|t| !t.is_empty());
    debug!("Display text under barcode: {}", display_value);

    Ok(RenderRequest {
        content: raw.content().to_string(),
        format,
        output_path: PathBuf::from(&raw.output_file),
        output_ext,
        display_value,
        bar_width,
        bar_height,
        font_size,
        label_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::Defaults;

    fn raw(format: &str, output: &str) -> RawOptions {
        let mut raw = RawOptions::new(&Defaults::default());
        raw.format = format.to_string();
        raw.output_file = output.to_string();
        raw
    }

    #[test]
    fn every_compatible_pair_validates() {
        for format in BarcodeFormat::ALL {
            for ext in allowed_extensions(format) {
                let request = validate(&raw(format.as_str(), &format!("x.{}", ext)))
                    .unwrap_or_else(|f| panic!("{} / {}: {}", format, ext, f));
                assert_eq!(request.format, format);
                assert_eq!(request.output_ext, *ext);
            }
        }
    }

    #[test]
    fn every_incompatible_pair_reports_extension() {
        for format in BarcodeFormat::ALL {
            for ext in OutputExt::ALL {
                if allowed_extensions(format).contains(&ext) {
                    continue;
                }
                let failure = validate(&raw(format.as_str(), &format!("x.{}", ext))).unwrap_err();
                assert_eq!(
                    failure.issues,
                    vec![ValidationIssue::IncompatibleExtension { extension: ext, format }]
                );
            }
        }
    }

    #[test]
    fn unknown_extension_reported_for_any_format() {
        let failure = validate(&raw("CODE128", "barcode.gif")).unwrap_err();
        assert_eq!(
            failure.issues,
            vec![ValidationIssue::UnsupportedExtension {
                extension: "gif".to_string(),
                path: "barcode.gif".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_format_reported_regardless_of_extension() {
        let failure = validate(&raw("BOGUS", "barcode.png")).unwrap_err();
        assert_eq!(
            failure.issues,
            vec![ValidationIssue::UnknownFormat("BOGUS".to_string())]
        );
        assert!(failure.reasons()[0].contains("BOGUS"));
    }

    #[test]
    fn format_and_extension_failures_are_both_reported() {
        let failure = validate(&raw("BOGUS", "barcode.gif")).unwrap_err();
        assert_eq!(failure.issues.len(), 2);
        assert!(matches!(failure.issues[0], ValidationIssue::UnknownFormat(_)));
        assert!(matches!(
            failure.issues[1],
            ValidationIssue::UnsupportedExtension { .. }
        ));
    }

    #[test]
    fn unknown_format_still_accepts_svg_extension() {
        let failure = validate(&raw("BOGUS", "barcode.svg")).unwrap_err();
        assert_eq!(failure.issues.len(), 1);
    }

    #[test]
    fn short_name_without_extension_is_rejected() {
        let failure = validate(&raw("CODE128", "ab")).unwrap_err();
        assert_eq!(
            failure.issues,
            vec![ValidationIssue::UnsupportedExtension {
                extension: String::new(),
                path: "ab".to_string(),
            }]
        );
    }

    #[test]
    fn extension_uses_last_dot_of_file_name() {
        assert_eq!(extension_of("out.v2.png").as_deref(), Some("png"));
        assert_eq!(extension_of("dir.d/barcode").as_deref(), None);
        assert_eq!(extension_of(".png").as_deref(), None);
        assert_eq!(extension_of("CODE.JPG").as_deref(), Some("jpg"));
    }

    #[test]
    fn jpg_output_becomes_jpeg() {
        let request = validate(&raw("EAN13", "label.jpg")).unwrap();
        assert_eq!(request.output_ext, OutputExt::Jpeg);
    }

    #[test]
    fn help_fails_even_when_options_are_valid() {
        let mut options = raw("CODE128", "barcode.png");
        options.help = true;
        let failure = validate(&options).unwrap_err();
        assert!(failure.help_requested);
        assert!(failure.issues.is_empty());
    }

    #[test]
    fn non_positive_dimensions_are_reported() {
        let mut options = raw("CODE128", "barcode.png");
        options.bar_width = 0;
        options.font_size = -3;
        let failure = validate(&options).unwrap_err();
        assert_eq!(
            failure.issues,
            vec![
                ValidationIssue::NonPositive { option: "width", value: 0 },
                ValidationIssue::NonPositive { option: "fontSize", value: -3 },
            ]
        );
    }

    #[test]
    fn empty_text_hides_the_label() {
        let mut options = raw("CODE128", "barcode.png");
        options.text = Some(String::new());
        let request = validate(&options).unwrap();
        assert!(!request.display_value);
        assert_eq!(request.label_text, None);
    }

    #[test]
    fn text_override_differs_from_content() {
        let mut options = raw("CODE128", "barcode.png");
        options.text = Some("Continue".to_string());
        options.positionals = vec!["cont".to_string()];
        let request = validate(&options).unwrap();
        assert!(request.display_value);
        assert_eq!(request.label_text.as_deref(), Some("Continue"));
        assert_eq!(request.content, "cont");
    }

    #[test]
    fn hide_value_flag_hides_the_label() {
        let mut options = raw("CODE128", "barcode.png");
        options.hide_value = true;
        assert!(!validate(&options).unwrap().display_value);
    }

    #[test]
    fn missing_content_defaults_to_placeholder() {
        let request = validate(&raw("CODE128", "barcode.png")).unwrap();
        assert_eq!(request.content, "Test");
    }

    #[test]
    fn empty_positional_defaults_to_placeholder() {
        let mut options = raw("CODE128", "barcode.png");
        options.positionals = vec![String::new()];
        assert_eq!(validate(&options).unwrap().content, "Test");
    }

    #[test]
    fn blank_placeholder_is_reported() {
        let mut options = raw("CODE128", "barcode.png");
        options.positionals = vec![String::new()];
        options.placeholder = String::new();
        let failure = validate(&options).unwrap_err();
        assert_eq!(failure.issues, vec![ValidationIssue::EmptyContent]);
    }
}
