use crate::domain::model::{Car, CarList, CsvFormat, FieldValue, Style, StyleList};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn export_path(&self) -> Option<&str>;
    fn export_format(&self) -> CsvFormat;
}

/// The remote inventory backend. Every mutation echoes the refreshed list.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list_cars(&self) -> Result<CarList>;
    async fn create_car(&self, car: &Car) -> Result<CarList>;
    async fn update_car(&self, car: &Car) -> Result<CarList>;
    async fn delete_car(&self, id: &FieldValue) -> Result<CarList>;
    async fn list_styles(&self) -> Result<StyleList>;
    async fn create_style(&self, style: &Style) -> Result<StyleList>;
    async fn request_csv_export(&self) -> Result<()>;
}

/// Yes/no question put to the user before a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}
