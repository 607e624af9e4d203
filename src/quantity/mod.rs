pub mod formatter;
pub mod grammar;
pub mod portion;
pub mod resolver;

pub use formatter::{format_number, format_quantity, format_quantity_from_factor};
pub use grammar::{parse_quantity, QuantityExpr, UnitKind};
pub use portion::{parse_portion, ReferencePortion};
pub use resolver::{resolve_quantity, resolve_quantity_factor, ConsumedQuantity, QuantityFactor};
