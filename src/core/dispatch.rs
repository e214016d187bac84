use tracing::info;

use crate::core::params::RenderRequest;
use crate::error::Result;
use crate::io::writers::write_atomic;
use crate::render::Renderer;
use crate::types::{OutputExt, RasterEncoding};

/// The one render path a request runs through.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RenderPath {
    Qr,
    Svg,
    Raster(RasterEncoding),
}

impl RenderPath {
    pub fn for_request(request: &RenderRequest) -> Self {
        match (request.format.is_qr(), request.output_ext) {
            (true, _) => RenderPath::Qr,
            (false, OutputExt::Svg) => RenderPath::Svg,
            (false, OutputExt::Png) => RenderPath::Raster(RasterEncoding::Png),
            (false, OutputExt::Jpeg) => RenderPath::Raster(RasterEncoding::Jpeg),
        }
    }
}

impl std::fmt::Display for RenderPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderPath::Qr => write!(f, "QR"),
            RenderPath::Svg => write!(f, "SVG"),
            RenderPath::Raster(encoding) => write!(f, "raster ({})", encoding),
        }
    }
}

/// Run the request through its render path and write the result to
/// `request.output_path`, replacing any existing file.
pub fn dispatch(request: &RenderRequest, renderer: &dyn Renderer) -> Result<RenderPath> {
    let path = RenderPath::for_request(request);
    info!(
        "Rendering '{}' as {} via {} path -> {:?}",
        request.content, request.format, path, request.output_path
    );

    match path {
        RenderPath::Qr => {
            renderer.render_qr(&request.content, &request.output_path, &request.qr_options())?
        }
        RenderPath::Svg => {
            let svg =
                renderer.render_svg(request.format, &request.content, &request.barcode_options())?;
            write_atomic(&request.output_path, svg.as_bytes())?;
        }
        RenderPath::Raster(encoding) => {
            let bytes = renderer.render_raster(
                request.format,
                &request.content,
                &request.barcode_options(),
                encoding,
            )?;
            write_atomic(&request.output_path, &bytes)?;
        }
    }

    Ok(path)
}
