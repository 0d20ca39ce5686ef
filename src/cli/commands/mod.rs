mod import;
mod list;
mod show;

pub use import::cmd_import_shows;
pub use list::cmd_list_shows;
pub use show::cmd_show;
