pub mod api;
pub(crate) mod authors;
pub mod db;
