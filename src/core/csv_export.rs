//! One-shot CSV export of a car list.
//!
//! [`CsvExporter::create`] renders the records into a buffer and hands the
//! whole buffer to a single spawned write. The caller gets an [`ExportTask`]
//! back immediately and learns the outcome by awaiting
//! [`ExportTask::finish`]. Exactly one outcome is produced per task: the
//! written content on success, or the underlying I/O error.

use crate::domain::model::{Car, CsvFormat};
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;

const PLAIN_SEPARATOR: &str = ", ";

/// Lifecycle of a single export. Moves once from `Pending` to a final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Pending,
    Done,
    Errored,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub path: String,
    pub content: String,
    pub records: usize,
}

/// Render `records` in input order, one line per record.
///
/// An empty slice renders to the empty string.
pub fn render(records: &[Car], format: CsvFormat) -> Result<String> {
    match format {
        CsvFormat::Plain => Ok(render_plain(records)),
        CsvFormat::Quoted => render_quoted(records),
    }
}

fn fields(car: &Car) -> [String; 7] {
    [
        car.id.to_string(),
        car.model.clone(),
        car.brand.clone(),
        car.year.to_string(),
        car.price.to_string(),
        car.color.clone(),
        car.style_select.clone(),
    ]
}

fn render_plain(records: &[Car]) -> String {
    let mut csv = String::new();
    for car in records {
        csv.push_str(&fields(car).join(PLAIN_SEPARATOR));
        csv.push('\n');
    }
    csv
}

fn render_quoted(records: &[Car]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for car in records {
        writer.write_record(fields(car))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| InventoryError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        InventoryError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

pub struct CsvExporter<S: Storage> {
    storage: S,
    format: CsvFormat,
}

impl<S: Storage + Clone + 'static> CsvExporter<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            format: CsvFormat::default(),
        }
    }

    pub fn with_format(mut self, format: CsvFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> CsvFormat {
        self.format
    }

    /// Start writing `records` to `path`. Must be called inside a tokio runtime.
    ///
    /// The path is used as given: missing parent directories are an error,
    /// and an existing file is overwritten.
    pub fn create(&self, path: impl Into<String>, records: Vec<Car>) -> ExportTask {
        let path = path.into();
        let storage = self.storage.clone();
        let format = self.format;
        let (state_tx, state_rx) = watch::channel(ExportState::Pending);

        let task_path = path.clone();
        let handle = tokio::spawn(async move {
            let outcome = write_export(&storage, &task_path, &records, format).await;
            let state = match &outcome {
                Ok(report) => {
                    tracing::info!(
                        "CSV export of {} records written to {}",
                        report.records,
                        report.path
                    );
                    ExportState::Done
                }
                Err(e) => {
                    tracing::error!("CSV export to {} failed: {}", task_path, e);
                    ExportState::Errored
                }
            };
            let _ = state_tx.send(state);
            outcome
        });

        ExportTask {
            path,
            state: state_rx,
            handle,
        }
    }
}

async fn write_export<S: Storage>(
    storage: &S,
    path: &str,
    records: &[Car],
    format: CsvFormat,
) -> Result<ExportReport> {
    let content = render(records, format)?;
    tracing::debug!("csv\n{}", content);

    storage.write_file(path, content.as_bytes()).await?;

    Ok(ExportReport {
        path: path.to_string(),
        content,
        records: records.len(),
    })
}

/// Handle to an export in flight.
pub struct ExportTask {
    path: String,
    state: watch::Receiver<ExportState>,
    handle: JoinHandle<Result<ExportReport>>,
}

impl ExportTask {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn state(&self) -> ExportState {
        *self.state.borrow()
    }

    /// Wait for the write to complete.
    pub async fn finish(self) -> Result<ExportReport> {
        self.handle.await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldValue;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                InventoryError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[derive(Clone)]
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        async fn read_file(&self, _path: &str) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }

        async fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Err(InventoryError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )))
        }
    }

    fn civic() -> Car {
        Car {
            id: FieldValue::Int(1),
            model: "Civic".to_string(),
            brand: "Honda".to_string(),
            year: FieldValue::Int(2020),
            price: FieldValue::Int(20000),
            color: "red".to_string(),
            style_select: "Sedan".to_string(),
        }
    }

    fn golf() -> Car {
        Car {
            id: FieldValue::from("2"),
            model: "Golf".to_string(),
            brand: "Volkswagen".to_string(),
            year: FieldValue::from("2018"),
            price: FieldValue::Float(15999.5),
            color: "blue".to_string(),
            style_select: "Hatchback".to_string(),
        }
    }

    #[test]
    fn test_render_single_record() {
        let csv = render(&[civic()], CsvFormat::Plain).unwrap();
        assert_eq!(csv, "1, Civic, Honda, 2020, 20000, red, Sedan\n");
    }

    #[test]
    fn test_render_preserves_input_order() {
        let csv = render(&[golf(), civic()], CsvFormat::Plain).unwrap();
        assert_eq!(
            csv,
            "2, Golf, Volkswagen, 2018, 15999.5, blue, Hatchback\n\
             1, Civic, Honda, 2020, 20000, red, Sedan\n"
        );
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_render_empty_is_empty_string() {
        assert_eq!(render(&[], CsvFormat::Plain).unwrap(), "");
        assert_eq!(render(&[], CsvFormat::Quoted).unwrap(), "");
    }

    #[test]
    fn test_plain_format_does_not_escape() {
        let mut car = civic();
        car.model = "Civic, Sport".to_string();
        let csv = render(&[car], CsvFormat::Plain).unwrap();
        assert_eq!(csv, "1, Civic, Sport, Honda, 2020, 20000, red, Sedan\n");
    }

    #[test]
    fn test_quoted_format_escapes_separators() {
        let mut car = civic();
        car.model = "Civic, Sport".to_string();
        car.color = "say \"red\"".to_string();
        let csv = render(&[car], CsvFormat::Quoted).unwrap();
        assert_eq!(
            csv,
            "1,\"Civic, Sport\",Honda,2020,20000,\"say \"\"red\"\"\",Sedan\n"
        );
    }

    #[tokio::test]
    async fn test_create_writes_whole_buffer() {
        let storage = MockStorage::new();
        let exporter = CsvExporter::new(storage.clone());

        let task = exporter.create("cars.csv", vec![civic(), golf()]);
        assert_eq!(task.path(), "cars.csv");
        let report = task.finish().await.unwrap();

        assert_eq!(report.records, 2);
        assert_eq!(report.path, "cars.csv");
        let written = storage.get_file("cars.csv").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), report.content);
        assert_eq!(report.content.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_create_with_no_records_writes_empty_file() {
        let storage = MockStorage::new();
        let exporter = CsvExporter::new(storage.clone());

        let report = exporter.create("empty.csv", Vec::new()).finish().await.unwrap();

        assert_eq!(report.records, 0);
        assert_eq!(report.content, "");
        assert_eq!(storage.get_file("empty.csv").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_write_failure_reports_error_only() {
        let exporter = CsvExporter::new(ReadOnlyStorage);

        let task = exporter.create("cars.csv", vec![civic()]);
        let mut state = task.state.clone();
        let result = task.finish().await;

        match result {
            Err(InventoryError::IoError(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected IoError, got {:?}", other),
        }
        assert_eq!(*state.borrow_and_update(), ExportState::Errored);
    }

    #[tokio::test]
    async fn test_state_moves_to_done() {
        let storage = MockStorage::new();
        let exporter = CsvExporter::new(storage).with_format(CsvFormat::Quoted);
        assert_eq!(exporter.format(), CsvFormat::Quoted);

        let task = exporter.create("cars.csv", vec![civic()]);
        let mut state = task.state.clone();
        let report = task.finish().await.unwrap();

        assert_eq!(report.content, "1,Civic,Honda,2020,20000,red,Sedan\n");
        assert_eq!(*state.borrow_and_update(), ExportState::Done);
    }
}
