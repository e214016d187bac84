use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// A filled rectangle in user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRect {
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
}

/// A centered line of text; `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgLabel {
    pub text: String,
    pub x: u64,
    pub y: u64,
    pub font_size: u32,
}

/// Serialize a white canvas with black bars and an optional label.
pub fn write_barcode_svg(
    width: u64,
    height: u64,
    bars: &[SvgRect],
    label: Option<&SvgLabel>,
) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let (w, h) = (width.to_string(), height.to_string());
    let view_box = format!("0 0 {} {}", width, height);
    writer.write_event(Event::Start(BytesStart::new("svg").with_attributes([
        ("xmlns", "http://www.w3.org/2000/svg"),
        ("version", "1.1"),
        ("width", w.as_str()),
        ("height", h.as_str()),
        ("viewBox", view_box.as_str()),
    ])))?;

    writer.write_event(Event::Empty(BytesStart::new("rect").with_attributes([
        ("x", "0"),
        ("y", "0"),
        ("width", w.as_str()),
        ("height", h.as_str()),
        ("fill", "#ffffff"),
    ])))?;

    writer.write_event(Event::Start(
        BytesStart::new("g").with_attributes([("fill", "#000000")]),
    ))?;
    for bar in bars {
        let (x, y) = (bar.x.to_string(), bar.y.to_string());
        let (bw, bh) = (bar.width.to_string(), bar.height.to_string());
        writer.write_event(Event::Empty(BytesStart::new("rect").with_attributes([
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("width", bw.as_str()),
            ("height", bh.as_str()),
        ])))?;
    }

    if let Some(label) = label {
        let (x, y) = (label.x.to_string(), label.y.to_string());
        let font_size = label.font_size.to_string();
        writer.write_event(Event::Start(BytesStart::new("text").with_attributes([
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("text-anchor", "middle"),
            ("font-family", "monospace"),
            ("font-size", font_size.as_str()),
        ])))?;
        writer.write_event(Event::Text(BytesText::new(&label.text)))?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("g")))?;
    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
