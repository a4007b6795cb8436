pub mod catalog;
pub mod directors;
pub mod reader;

pub use catalog::{read_catalog, Catalog, CatalogRecord};
pub use directors::{read_directors, DirectorIndex};
pub use reader::LoadStats;
