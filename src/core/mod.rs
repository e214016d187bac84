//! Core decision logic: the default table (`params`), raw user options
//! (`options`), validation into a `RenderRequest` (`validate`), and routing to
//! exactly one render path (`dispatch`).
pub mod dispatch;
pub mod options;
pub mod params;
pub mod validate;
