pub mod csv_export;
pub mod render;

pub use crate::domain::model::{Car, CarList, CsvFormat, FieldValue, Style, StyleList};
pub use crate::domain::ports::{ConfigProvider, Confirm, InventoryApi, Storage};
pub use crate::utils::error::Result;
