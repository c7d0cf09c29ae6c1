use crate::domain::documents::{
    Compressible, DocumentProcessor, Encryptable, ExcelReadable, ExcelWritable, PdfReadable,
    PdfWritable, WordReadable, WordWritable,
};
use crate::error::{Result, SolidError};
use tracing::info;

/// Full PDF support: read, write, compress and encrypt.
pub struct PdfProcessor;

impl PdfReadable for PdfProcessor {
    fn read_pdf(&self, file_path: &str) -> String {
        format!("Reading PDF content from {file_path}")
    }
}

impl PdfWritable for PdfProcessor {
    fn write_pdf(&self, content: &str, file_path: &str) -> Result<usize> {
        info!("Writing PDF content to {file_path}");
        Ok(content.len())
    }
}

impl Compressible for PdfProcessor {
    fn compress_document(&self, file_path: &str) -> bool {
        info!("Compressing PDF: {file_path}");
        true
    }
}

impl Encryptable for PdfProcessor {
    fn encrypt_document(&self, file_path: &str, password: &str) -> bool {
        if password.is_empty() {
            return false;
        }
        info!("Encrypting PDF: {file_path} with password");
        true
    }
}

impl DocumentProcessor for PdfProcessor {
    fn name(&self) -> &str {
        "PDF Processor"
    }

    fn as_pdf_reader(&self) -> Option<&dyn PdfReadable> {
        Some(self)
    }

    fn as_pdf_writer(&self) -> Option<&dyn PdfWritable> {
        Some(self)
    }

    fn as_compressor(&self) -> Option<&dyn Compressible> {
        Some(self)
    }

    fn as_encryptor(&self) -> Option<&dyn Encryptable> {
        Some(self)
    }
}

/// Reads text out of PDF and Word files. Nothing else.
pub struct SimpleTextExtractor;

impl PdfReadable for SimpleTextExtractor {
    fn read_pdf(&self, file_path: &str) -> String {
        format!("Extracting text from PDF: {file_path}")
    }
}

impl WordReadable for SimpleTextExtractor {
    fn read_word(&self, file_path: &str) -> String {
        format!("Extracting text from Word document: {file_path}")
    }
}

impl DocumentProcessor for SimpleTextExtractor {
    fn name(&self) -> &str {
        "Text Extractor"
    }

    fn as_pdf_reader(&self) -> Option<&dyn PdfReadable> {
        Some(self)
    }

    fn as_word_reader(&self) -> Option<&dyn WordReadable> {
        Some(self)
    }
}

/// Word documents: read and write.
pub struct WordProcessor;

impl WordReadable for WordProcessor {
    fn read_word(&self, file_path: &str) -> String {
        format!("Reading Word document from {file_path}")
    }
}

impl WordWritable for WordProcessor {
    fn write_word(&self, content: &str, file_path: &str) -> Result<usize> {
        info!("Writing Word document to {file_path}");
        Ok(content.len())
    }
}

impl DocumentProcessor for WordProcessor {
    fn name(&self) -> &str {
        "Word Processor"
    }

    fn as_word_reader(&self) -> Option<&dyn WordReadable> {
        Some(self)
    }

    fn as_word_writer(&self) -> Option<&dyn WordWritable> {
        Some(self)
    }
}

/// Spreadsheet reports. Rows are rendered as CSV.
pub struct ExcelReportGenerator;

impl ExcelReportGenerator {
    pub fn render(rows: &[Vec<String>]) -> Result<String> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        for row in rows {
            wtr.write_record(row)?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| SolidError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| SolidError::Validation(e.to_string()))
    }
}

impl ExcelReadable for ExcelReportGenerator {
    fn read_excel(&self, file_path: &str) -> String {
        format!("Reading Excel data from {file_path}")
    }
}

impl ExcelWritable for ExcelReportGenerator {
    fn write_excel(&self, rows: &[Vec<String>], file_path: &str) -> Result<usize> {
        let sheet = Self::render(rows)?;
        info!(rows = rows.len(), "Writing Excel report to {file_path}");
        Ok(sheet.len())
    }
}

impl DocumentProcessor for ExcelReportGenerator {
    fn name(&self) -> &str {
        "Excel Report Generator"
    }

    fn as_excel_reader(&self) -> Option<&dyn ExcelReadable> {
        Some(self)
    }

    fn as_excel_writer(&self) -> Option<&dyn ExcelWritable> {
        Some(self)
    }
}

pub fn default_processors() -> Vec<Box<dyn DocumentProcessor>> {
    vec![
        Box::new(PdfProcessor),
        Box::new(SimpleTextExtractor),
        Box::new(WordProcessor),
        Box::new(ExcelReportGenerator),
    ]
}
