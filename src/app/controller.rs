//! Inventory page controller.
//!
//! Owns the car form, the style form and the rendered views, and turns each
//! user action into one call on the [`InventoryApi`]. Failures from the API
//! are logged and dropped: the view stays as it was cleared and the action is
//! not retried.

use crate::core::render::{compose_rows, delete_confirmation, format_table, style_options, TableRow};
use crate::domain::model::{Car, CarList, FieldValue, Style, StyleList};
use crate::domain::ports::{Confirm, InventoryApi};

pub const EXPORT_NOTICE: &str = "CSV Create";

/// Values of the add/edit car form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub id: String,
    pub model: String,
    pub brand: String,
    pub year: String,
    pub price: String,
    pub color: String,
    pub style_select: String,
}

impl CarForm {
    pub fn from_car(car: &Car) -> Self {
        Self {
            id: car.id.to_string(),
            model: car.model.clone(),
            brand: car.brand.clone(),
            year: car.year.to_string(),
            price: car.price.to_string(),
            color: car.color.clone(),
            style_select: car.style_select.clone(),
        }
    }

    pub fn to_car(&self) -> Car {
        Car {
            id: FieldValue::from(self.id.as_str()),
            model: self.model.clone(),
            brand: self.brand.clone(),
            year: FieldValue::from(self.year.as_str()),
            price: FieldValue::from(self.price.as_str()),
            color: self.color.clone(),
            style_select: self.style_select.clone(),
        }
    }

    /// An empty or zero id means the form describes a car not yet stored.
    pub fn is_new(&self) -> bool {
        FieldValue::from(self.id.as_str()).is_blank_or_zero()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleForm {
    pub name: String,
    pub description: String,
}

impl StyleForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct PageController<A: InventoryApi, P: Confirm> {
    api: A,
    prompt: P,
    pub car_form: CarForm,
    pub style_form: StyleForm,
    rows: Vec<TableRow>,
    style_options: Vec<String>,
}

impl<A: InventoryApi, P: Confirm> PageController<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            car_form: CarForm::default(),
            style_form: StyleForm::default(),
            rows: Vec::new(),
            style_options: Vec::new(),
        }
    }

    /// Fill both views from the server.
    pub async fn init(&mut self) {
        self.load_table(None).await;
        self.update_styles(None).await;
    }

    /// Clear the table, then render `data` or, when absent, a fresh `GET /cars`.
    pub async fn load_table(&mut self, data: Option<CarList>) {
        self.rows.clear();

        let data = match data {
            Some(data) => data,
            None => match self.api.list_cars().await {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("Failed to load cars: {}", e);
                    return;
                }
            },
        };

        self.rows = compose_rows(&data);
    }

    /// Copy a car into the form for editing.
    pub fn edit(&mut self, car: &Car) {
        self.car_form = CarForm::from_car(car);
        tracing::debug!("edit {:?}", car);
    }

    /// Send the car form: create when it has no id, update otherwise.
    pub async fn submit_car(&mut self) {
        let car = self.car_form.to_car();
        tracing::debug!("data {:?}", car);

        let result = if self.car_form.is_new() {
            self.api.create_car(&car).await
        } else {
            self.api.update_car(&car).await
        };

        match result {
            Ok(data) => {
                self.car_form.reset();
                self.load_table(Some(data)).await;
            }
            Err(e) => tracing::error!("Failed to save car: {}", e),
        }
    }

    /// Ask for confirmation, then delete the car and render the echoed list.
    ///
    /// Returns whether the deletion was confirmed.
    pub async fn delete(&mut self, car: &Car) -> bool {
        if !self.prompt.confirm(&delete_confirmation(car)) {
            return false;
        }

        match self.api.delete_car(&car.id).await {
            Ok(data) => self.load_table(Some(data)).await,
            Err(e) => tracing::error!("Failed to delete car {}: {}", car.id, e),
        }
        true
    }

    pub async fn submit_style(&mut self) {
        let style = Style {
            name: self.style_form.name.clone(),
            description: self.style_form.description.clone(),
        };

        match self.api.create_style(&style).await {
            Ok(data) => {
                self.style_form.reset();
                self.update_styles(Some(data)).await;
            }
            Err(e) => tracing::error!("Failed to save style: {}", e),
        }
    }

    /// Clear the style options, then render `data` or a fresh `GET /styleCar`.
    pub async fn update_styles(&mut self, data: Option<StyleList>) {
        self.style_options.clear();

        let data = match data {
            Some(data) => data,
            None => match self.api.list_styles().await {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("Failed to load styles: {}", e);
                    return;
                }
            },
        };

        self.style_options = style_options(&data);
    }

    /// Trigger the server-side export. The notice is returned whatever the outcome.
    pub async fn export_csv(&self) -> &'static str {
        if let Err(e) = self.api.request_csv_export().await {
            tracing::error!("Failed to request CSV export: {}", e);
        }
        EXPORT_NOTICE
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn cars(&self) -> impl Iterator<Item = &Car> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Car { car, .. } => Some(car),
            TableRow::Empty(_) => None,
        })
    }

    pub fn find_car(&self, id: &str) -> Option<&Car> {
        self.cars().find(|car| car.id.to_string() == id)
    }

    pub fn table(&self) -> String {
        format_table(&self.rows)
    }

    pub fn style_options(&self) -> &[String] {
        &self.style_options
    }
}
