pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, section, success, summary_row, warn};
pub use table::{swatch_table, SwatchRow};
pub use theme::{theme, SwatchMode, Theme};
