//! Output formats for parsed structures
//!
//! - sexpr: canonical single-line s-expression
//! - json / yaml: nested arrays of strings via serde
//! - treeviz: one node per line, for eyeballing large files

pub mod registry;
pub mod serde_formats;
pub mod sexpr;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use sexpr::{to_sexpr_string, SexprFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
