use clap::Parser;
use std::path::PathBuf;

use barcode_creator::{Defaults, RawOptions};

#[derive(Parser, Debug)]
#[command(
    name = "barcode-creator",
    version,
    about = "Create a barcode or QR code image from a text string",
    disable_help_flag = true
)]
pub struct CliArgs {
    /// Barcode content (first value is used)
    pub content: Vec<String>,

    /// Barcode format, e.g. CODE128, EAN13, QRCODE
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Output file; its extension selects png, jpeg or svg
    #[arg(short = 'o', long = "outputfile", alias = "output-file")]
    pub outputfile: Option<String>,

    /// Text at the bottom of the barcode; empty hides it
    #[arg(short = 't', long)]
    pub text: Option<String>,

    /// Do not display anything at the bottom of the barcode
    #[arg(short = 'T', long = "notext", alias = "hideValue")]
    pub notext: bool,

    /// Width of a single bar in pixels
    #[arg(short = 'x', long = "width", alias = "barwidth", allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Height of the barcode in pixels
    #[arg(short = 'y', long = "height", alias = "barheight", allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Font size of the text in points
    #[arg(
        short = 's',
        long = "fontSize",
        aliases = ["size", "font-size"],
        allow_negative_numbers = true
    )]
    pub font_size: Option<i64>,

    /// Show the usage text and quit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Enable diagnostic logging on stderr
    #[arg(short = 'v', long, alias = "debug")]
    pub verbose: bool,

    /// JSON file replacing the built-in default values
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,
}

impl CliArgs {
    /// Fill every option the user left out from `defaults`.
    pub fn into_raw(self, defaults: &Defaults) -> RawOptions {
        let mut raw = RawOptions::new(defaults);
        raw.positionals = self.content;
        if let Some(format) = self.format {
            raw.format = format;
        }
        if let Some(outputfile) = self.outputfile {
            raw.output_file = outputfile;
        }
        raw.text = self.text;
        raw.hide_value = raw.hide_value || self.notext;
        raw.bar_width = self.width.unwrap_or(raw.bar_width);
        raw.bar_height = self.height.unwrap_or(raw.bar_height);
        raw.font_size = self.font_size.unwrap_or(raw.font_size);
        raw.help = self.help;
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> RawOptions {
        let mut full = vec!["barcode-creator"];
        full.extend_from_slice(argv);
        CliArgs::try_parse_from(full)
            .unwrap()
            .into_raw(&Defaults::default())
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let raw = parse(&[]);
        assert_eq!(raw, RawOptions::new(&Defaults::default()));
        assert_eq!(raw.content(), "Test");
    }

    #[test]
    fn short_flags_map_to_long_names() {
        let raw = parse(&[
            "-f", "EAN8", "-o", "out.jpg", "-t", "label", "-x", "3", "-y", "40", "-s", "12", "-T",
            "1234567",
        ]);
        assert_eq!(raw.format, "EAN8");
        assert_eq!(raw.output_file, "out.jpg");
        assert_eq!(raw.text.as_deref(), Some("label"));
        assert_eq!((raw.bar_width, raw.bar_height, raw.font_size), (3, 40, 12));
        assert!(raw.hide_value);
        assert_eq!(raw.content(), "1234567");
    }

    #[test]
    fn long_aliases_are_accepted() {
        let raw = parse(&["--barwidth=4", "--barheight=50", "--size=18", "--hideValue", "--debug"]);
        assert_eq!((raw.bar_width, raw.bar_height, raw.font_size), (4, 50, 18));
        assert!(raw.hide_value);
    }

    #[test]
    fn empty_text_is_kept_as_empty() {
        let raw = parse(&["--text=", "11235"]);
        assert_eq!(raw.text.as_deref(), Some(""));
    }

    #[test]
    fn negative_width_reaches_the_validator() {
        let raw = parse(&["-x", "-2"]);
        assert_eq!(raw.bar_width, -2);
    }

    #[test]
    fn help_flag_is_an_option_not_a_clap_exit() {
        assert!(parse(&["-h"]).help);
        assert!(parse(&["--help"]).help);
    }

    #[test]
    fn defaults_record_fills_missing_values() {
        let defaults = Defaults {
            format: "QRCODE".to_string(),
            output_file: "code.png".to_string(),
            ..Defaults::default()
        };
        let raw = CliArgs::try_parse_from(["barcode-creator", "hi"])
            .unwrap()
            .into_raw(&defaults);
        assert_eq!(raw.format, "QRCODE");
        assert_eq!(raw.output_file, "code.png");
    }
}
