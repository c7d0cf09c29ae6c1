//! Segregated document capabilities.

use crate::error::Result;
use serde::Serialize;

pub trait PdfReadable {
    fn read_pdf(&self, file_path: &str) -> String;
}

pub trait WordReadable {
    fn read_word(&self, file_path: &str) -> String;
}

pub trait ExcelReadable {
    fn read_excel(&self, file_path: &str) -> String;
}

/// Writers return the number of bytes rendered for the target file.
pub trait PdfWritable {
    fn write_pdf(&self, content: &str, file_path: &str) -> Result<usize>;
}

pub trait WordWritable {
    fn write_word(&self, content: &str, file_path: &str) -> Result<usize>;
}

pub trait ExcelWritable {
    fn write_excel(&self, rows: &[Vec<String>], file_path: &str) -> Result<usize>;
}

pub trait Compressible {
    fn compress_document(&self, file_path: &str) -> bool;
}

pub trait Encryptable {
    fn encrypt_document(&self, file_path: &str, password: &str) -> bool;
}

/// Capability lookup for document processors. A processor overrides only the
/// accessors for what it supports.
pub trait DocumentProcessor {
    fn name(&self) -> &str;

    fn as_pdf_reader(&self) -> Option<&dyn PdfReadable> {
        None
    }

    fn as_word_reader(&self) -> Option<&dyn WordReadable> {
        None
    }

    fn as_excel_reader(&self) -> Option<&dyn ExcelReadable> {
        None
    }

    fn as_pdf_writer(&self) -> Option<&dyn PdfWritable> {
        None
    }

    fn as_word_writer(&self) -> Option<&dyn WordWritable> {
        None
    }

    fn as_excel_writer(&self) -> Option<&dyn ExcelWritable> {
        None
    }

    fn as_compressor(&self) -> Option<&dyn Compressible> {
        None
    }

    fn as_encryptor(&self) -> Option<&dyn Encryptable> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub processor: String,
    pub outputs: Vec<String>,
}

/// Runs the standard document workload against whatever the processor
/// supports.
pub fn process_document_suite(processor: &dyn DocumentProcessor) -> Result<DocumentReport> {
    let mut outputs = Vec::new();

    if let Some(p) = processor.as_pdf_reader() {
        outputs.push(p.read_pdf("document.pdf"));
    }
    if let Some(p) = processor.as_word_reader() {
        outputs.push(p.read_word("document.docx"));
    }
    if let Some(p) = processor.as_excel_reader() {
        outputs.push(p.read_excel("spreadsheet.xlsx"));
    }
    if let Some(p) = processor.as_pdf_writer() {
        let bytes = p.write_pdf("Quarterly summary", "summary.pdf")?;
        outputs.push(format!("Wrote {bytes} bytes to summary.pdf"));
    }
    if let Some(p) = processor.as_word_writer() {
        let bytes = p.write_word("Meeting notes", "notes.docx")?;
        outputs.push(format!("Wrote {bytes} bytes to notes.docx"));
    }
    if let Some(p) = processor.as_excel_writer() {
        let rows = vec![
            vec!["region".to_string(), "revenue".to_string()],
            vec!["US".to_string(), "1200".to_string()],
            vec!["EU".to_string(), "900".to_string()],
        ];
        let bytes = p.write_excel(&rows, "report.xlsx")?;
        outputs.push(format!("Wrote {bytes} bytes to report.xlsx"));
    }
    if let Some(p) = processor.as_compressor()
        && p.compress_document("document.pdf")
    {
        outputs.push("Compressed document.pdf".to_string());
    }
    if let Some(p) = processor.as_encryptor()
        && p.encrypt_document("document.pdf", "secret123")
    {
        outputs.push("Encrypted document.pdf".to_string());
    }

    Ok(DocumentReport {
        processor: processor.name().to_string(),
        outputs,
    })
}
