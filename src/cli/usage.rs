use barcode_creator::{BarcodeFormat, OutputExt, ValidationFailure, allowed_extensions};

/// Reason lines (one per failed check) followed by the usage block.
pub fn render(program: &str, failure: Option<&ValidationFailure>) -> String {
    let mut out = String::new();
    if let Some(failure) = failure {
        for reason in failure.reasons() {
            out.push_str(&reason);
            out.push_str("\n\n");
        }
    }

    out.push_str(&format!(
        "Use like this:
{program} [-f FORMAT -o OUTPUT] barcodetext

Options:
  -f, --format=       Specify a barcode format.
                        [Default: CODE128]
  -h, --help          Show this help message and quit.
  -o, --outputfile=   Specify an output file.
                        [Default: ./barcode.png]
  -t, --text=         Specify what text is at the bottom of the barcode.
                        [Default: text is the same as the barcode]
  -T, --notext        Do not display anything at the bottom of the barcode.
  -x, --width=        Specify width of the barcode bar (in pixels)
                        [Default value: 2]
  -y, --height=       Specify height of the barcode (in pixels)
                        [Default value: 100]
  -s, --fontSize=     Specify the size of the text (in points)
                        [Default value: 24]
  -v, --verbose       Print diagnostic messages to stderr.
      --defaults=     Read default values from a JSON file.

  For example to create a barcode without text at the bottom:
    barcode-creator --text='' 11235

  For example to create a barcode with different text than content:
    barcode-creator --text='Continue' \"cont\"

Format Options:
"
    ));

    for format in BarcodeFormat::ALL {
        out.push_str(&format!("  - {}", format));
        if allowed_extensions(format).len() < OutputExt::ALL.len() {
            let only: Vec<&str> = allowed_extensions(format)
                .iter()
                .map(OutputExt::as_str)
                .collect();
            out.push_str(&format!(" ({} only)", only.join(", ")));
        }
        out.push('\n');
    }

    out.push_str("\nOutput Options:\n");
    for ext in OutputExt::ALL {
        out.push_str(&format!("  - {}\n", ext));
    }
    out.push_str("  (jpg is accepted as jpeg; svg applies to 1D formats)\n");
    out
}

pub fn present(program: &str, failure: Option<&ValidationFailure>) {
    eprint!("{}", render(program, failure));
}
