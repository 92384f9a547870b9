pub mod config;
pub mod paths;

pub use config::{
    default_filter, default_group, default_sort, Config, LibraryConfig, ViewConfig,
};
pub use paths::{base_path_override, PathManager};
