pub mod list_cmds;

pub use list_cmds::{list_apps, list_apps_to, ListReport, SkippedArchive};
