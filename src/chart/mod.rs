pub mod pipeline;
pub mod render;
pub mod table;

pub use pipeline::{pct_change, pull_all_data};
pub use render::plot_data;
pub use table::{LongRow, LongTable, WideTable};
