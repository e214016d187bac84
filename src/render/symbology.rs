//! Maps each 1D `BarcodeFormat` onto its `barcoders` encoder. The result is the
//! module pattern: one byte per module, `1` for a bar and `0` for a space.
use barcoders::sym::codabar::Codabar;
use barcoders::sym::code128::Code128;
use barcoders::sym::code39::Code39;
use barcoders::sym::ean8::EAN8;
use barcoders::sym::ean13::EAN13;
use barcoders::sym::ean_supp::EANSUPP;
use barcoders::sym::tf::TF;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::BarcodeFormat;

// Code 128 character set selectors understood by `barcoders`.
const CODE128_SET_A: char = 'À';
const CODE128_SET_B: char = 'Ɓ';
const CODE128_SET_C: char = 'Ć';

fn code128_data(set: char, content: &str) -> String {
    format!("{}{}", set, content)
}

/// Set C packs digit pairs, so it only applies to an even run of digits.
fn code128_auto(content: &str) -> String {
    if content.starts_with([CODE128_SET_A, CODE128_SET_B, CODE128_SET_C]) {
        return content.to_string();
    }
    let numeric = !content.is_empty() && content.bytes().all(|b| b.is_ascii_digit());
    if numeric && content.len() % 2 == 0 {
        code128_data(CODE128_SET_C, content)
    } else {
        code128_data(CODE128_SET_B, content)
    }
}

fn codabar_data(content: &str) -> String {
    let guarded = |c: Option<char>| c.is_some_and(|c| matches!(c.to_ascii_uppercase(), 'A'..='D'));
    if guarded(content.chars().next()) && guarded(content.chars().last()) && content.len() > 1 {
        content.to_string()
    } else {
        format!("A{}A", content)
    }
}

/// GS1 mod-10 check digit: weights 3, 1, 3, ... from the rightmost data digit.
fn gs1_check_digit(data: &[u8]) -> u8 {
    let sum: u32 = data
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| (d - b'0') as u32 * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    b'0' + ((10 - sum % 10) % 10) as u8
}

/// ITF-14 takes 13 data digits (check digit appended) or 14 digits whose last
/// digit must be the correct check digit.
fn itf14_data(content: &str) -> Result<String> {
    let format = BarcodeFormat::Itf14;
    if !content.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::encode(format, content, "only digits are allowed"));
    }
    let bytes = content.as_bytes();
    match bytes.len() {
        13 => Ok(format!("{}{}", content, gs1_check_digit(bytes) as char)),
        14 => {
            let expected = gs1_check_digit(&bytes[..13]);
            if bytes[13] == expected {
                Ok(content.to_string())
            } else {
                Err(Error::encode(
                    format,
                    content,
                    format!("check digit should be {}", expected as char),
                ))
            }
        }
        n => Err(Error::encode(
            format,
            content,
            format!("expected 13 or 14 digits, got {}", n),
        )),
    }
}

fn supplement(format: BarcodeFormat, content: &str, digits: usize) -> Result<Vec<u8>> {
    if content.len() != digits {
        return Err(Error::encode(
            format,
            content,
            format!("expected exactly {} digits", digits),
        ));
    }
    EANSUPP::new(content.to_string())
        .map(|b| b.encode())
        .map_err(|e| Error::encode(format, content, e))
}

pub fn encode_modules(format: BarcodeFormat, content: &str) -> Result<Vec<u8>> {
    let encoded = match format {
        BarcodeFormat::Code128 => Code128::new(code128_auto(content)).map(|b| b.encode()),
        BarcodeFormat::Code128A => {
            Code128::new(code128_data(CODE128_SET_A, content)).map(|b| b.encode())
        }
        BarcodeFormat::Code128B => {
            Code128::new(code128_data(CODE128_SET_B, content)).map(|b| b.encode())
        }
        BarcodeFormat::Code128C => {
            Code128::new(code128_data(CODE128_SET_C, content)).map(|b| b.encode())
        }
        // UPC-A is EAN-13 with a leading zero
        BarcodeFormat::Upc => EAN13::new(format!("0{}", content)).map(|b| b.encode()),
        BarcodeFormat::Ean13 => EAN13::new(content.to_string()).map(|b| b.encode()),
        BarcodeFormat::Ean8 => EAN8::new(content.to_string()).map(|b| b.encode()),
        BarcodeFormat::Ean5 => return supplement(format, content, 5),
        BarcodeFormat::Ean2 => return supplement(format, content, 2),
        BarcodeFormat::Code39 => Code39::new(content.to_string()).map(|b| b.encode()),
        BarcodeFormat::Itf14 => TF::interleaved(itf14_data(content)?).map(|b| b.encode()),
        BarcodeFormat::Codabar => Codabar::new(codabar_data(content)).map(|b| b.encode()),
        BarcodeFormat::Msi
        | BarcodeFormat::Msi10
        | BarcodeFormat::Msi11
        | BarcodeFormat::Msi1010
        | BarcodeFormat::Msi1110
        | BarcodeFormat::Pharmacode
        | BarcodeFormat::QrCode => return Err(Error::UnsupportedSymbology(format)),
    };

    let modules = encoded.map_err(|e| Error::encode(format, content, e))?;
    debug!("Encoded '{}' as {} into {} modules", content, format, modules.len());
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code128_picks_set_c_for_even_digits() {
        assert_eq!(code128_auto("1234"), "Ć1234");
        assert_eq!(code128_auto("11235"), "Ɓ11235");
        assert_eq!(code128_auto("Hello"), "ƁHello");
        assert_eq!(code128_auto("ÀABC"), "ÀABC");
    }

    #[test]
    fn codabar_gets_default_guards() {
        assert_eq!(codabar_data("40156"), "A40156A");
        assert_eq!(codabar_data("B40156D"), "B40156D");
    }

    #[test]
    fn code128_encodes_to_bars_and_spaces() {
        let modules = encode_modules(BarcodeFormat::Code128, "11235").unwrap();
        assert!(!modules.is_empty());
        assert!(modules.iter().all(|&m| m <= 1));
        assert_eq!(modules[0], 1);
    }

    #[test]
    fn ean13_rejects_letters() {
        let err = encode_modules(BarcodeFormat::Ean13, "ABCDEFGHIJKL").unwrap_err();
        assert!(matches!(err, Error::Encode { format: BarcodeFormat::Ean13, .. }));
    }

    #[test]
    fn ean5_requires_five_digits() {
        assert!(encode_modules(BarcodeFormat::Ean5, "12345").is_ok());
        assert!(matches!(
            encode_modules(BarcodeFormat::Ean5, "12").unwrap_err(),
            Error::Encode { .. }
        ));
    }

    #[test]
    fn itf14_appends_check_digit_to_thirteen_digits() {
        assert_eq!(itf14_data("1234567890123").unwrap(), "12345678901231");
        assert_eq!(itf14_data("12345678901231").unwrap(), "12345678901231");
        assert!(encode_modules(BarcodeFormat::Itf14, "1234567890123").is_ok());
    }

    #[test]
    fn itf14_rejects_wrong_length() {
        let err = encode_modules(BarcodeFormat::Itf14, "12").unwrap_err();
        assert!(matches!(err, Error::Encode { format: BarcodeFormat::Itf14, .. }));
        assert!(encode_modules(BarcodeFormat::Itf14, "123456789012345").is_err());
    }

    #[test]
    fn itf14_rejects_wrong_check_digit() {
        let err = encode_modules(BarcodeFormat::Itf14, "12345678901230").unwrap_err();
        match err {
            Error::Encode { reason, .. } => assert!(reason.contains("should be 1")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn msi_family_has_no_encoder() {
        for format in [BarcodeFormat::Msi, BarcodeFormat::Msi1110, BarcodeFormat::Pharmacode] {
            assert!(matches!(
                encode_modules(format, "1234").unwrap_err(),
                Error::UnsupportedSymbology(f) if f == format
            ));
        }
    }
}
