//! Command implementations for biome-cli

pub mod apply;
pub mod convert;
pub mod fetch;
pub mod list;
pub mod setup;

pub use apply::{ApplyArgs, run_apply};
pub use convert::run_convert;
pub use fetch::run_fetch;
pub use list::{run_list, run_show};
pub use setup::run_setup;
