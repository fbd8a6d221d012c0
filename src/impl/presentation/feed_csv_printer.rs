use fractic_server_error::ServerError;

use crate::{entities::RecordRow, errors::CsvWriteError};

const HEADERS: [&str; 7] = [
    "Descrição",
    "Categoria",
    "Data",
    "Natureza",
    "Tipo",
    "Valor",
    "Responsável",
];

pub(crate) struct FeedCsvPrinter;

impl FeedCsvPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print(&self, rows: &[RecordRow]) -> Result<String, ServerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADERS)
            .map_err(|e| CsvWriteError::with_debug(&e))?;
        for row in rows {
            writer
                .write_record([
                    row.description.as_str(),
                    row.category.as_str(),
                    row.date.as_str(),
                    row.kind_label,
                    row.recurrence.unwrap_or("-"),
                    row.amount.as_str(),
                    row.person.as_str(),
                ])
                .map_err(|e| CsvWriteError::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvWriteError::with_debug(e.error()))?;
        String::from_utf8(bytes).map_err(|e| CsvWriteError::with_debug(&e))
    }
}
