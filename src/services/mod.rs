pub mod catalogs;
pub mod recommendations;
pub mod search;
