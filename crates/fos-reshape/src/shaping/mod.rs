//! Text shaping module

mod tables;
mod script;
mod normalize;
mod arabic;
mod shaper;
pub mod cache;

pub use script::{CodePointCategory, classify, is_script_char};
pub use normalize::normalize;
pub use arabic::{PositionalForm, select_form};
pub use shaper::{ShaperConfig, TextDirection, TextShaper};
pub use cache::{ShapeCache, ShapeCacheStats};
