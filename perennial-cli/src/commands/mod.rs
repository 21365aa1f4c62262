pub mod add;
pub mod export;
pub mod import;
pub mod list;
pub mod new;
pub mod open;
pub mod remove;
pub mod share;
pub mod show;
