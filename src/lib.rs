//! Pango: ラベル付き一次元データコンテナ
//!
//! 値の列とラベルの列を対応付けた`Series`と、数値型のSeriesに対する
//! 算術演算・集約・統計関数を提供します。

pub mod config;
pub mod error;
pub mod index;
pub mod numeric;
pub mod series;

// Re-export commonly used types
pub use config::DisplayConfig;
pub use error::{Error, Result};
pub use index::{Index, RangeIndex, StringIndex};
pub use numeric::{Numeric, NumericKind};
pub use series::{NumericSeries, Series};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
