mod index;
mod persistence;

pub use index::{FoodCatalog, FUZZY_THRESHOLD};
pub use persistence::{load_catalog, merge_catalogs, save_catalog};
