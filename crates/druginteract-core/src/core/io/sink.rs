use crate::core::models::report::Report;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

const PDF_PAGE_WIDTH: i64 = 595;
const PDF_PAGE_HEIGHT: i64 = 842;
const PDF_MARGIN: i64 = 50;
const PDF_FONT_SIZE: i64 = 10;
const PDF_LEADING: i64 = 12;
const PDF_LINES_PER_PAGE: usize = ((PDF_PAGE_HEIGHT - 2 * PDF_MARGIN) / PDF_LEADING) as usize;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Error writing report to '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("Error building PDF report '{path}': {message}")]
    Pdf { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Pdf,
}

impl ReportFormat {
    /// Infers the format from the file extension (`.txt` or `.pdf`, any case).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn sink(&self) -> Box<dyn ReportSink> {
        match self {
            Self::Text => Box::new(TextSink),
            Self::Pdf => Box::new(PdfSink),
        }
    }
}

/// Serializes a finished [`Report`] to a file.
pub trait ReportSink {
    fn write_report(&self, report: &Report, path: &Path) -> Result<(), SinkError>;
}

/// Plain text, one report line per file line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSink;

impl ReportSink for TextSink {
    fn write_report(&self, report: &Report, path: &Path) -> Result<(), SinkError> {
        let io_err = |e: io::Error| SinkError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        for line in report.lines() {
            writeln!(writer, "{}", line).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;
        info!("Report written to '{}'.", path.display());
        Ok(())
    }
}

/// A4 pages of monospaced text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfSink;

impl PdfSink {
    fn build_document(lines: &[String]) -> Result<Document, lopdf::Error> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        let empty: [String; 1] = [String::new()];
        let pages: Vec<&[String]> = if lines.is_empty() {
            vec![&empty[..]]
        } else {
            lines.chunks(PDF_LINES_PER_PAGE).collect()
        };

        for page_lines in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), Object::Integer(PDF_FONT_SIZE)]),
                Operation::new("TL", vec![Object::Integer(PDF_LEADING)]),
                Operation::new(
                    "Td",
                    vec![
                        Object::Integer(PDF_MARGIN),
                        Object::Integer(PDF_PAGE_HEIGHT - PDF_MARGIN),
                    ],
                ),
            ];
            for line in page_lines {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(win_ansi_bytes(line), StringFormat::Literal)],
                ));
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(page_count),
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PDF_PAGE_WIDTH),
                Object::Integer(PDF_PAGE_HEIGHT),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        Ok(doc)
    }
}

/// Encodes text for a WinAnsi font. Characters outside the code page become `?`.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\t' => b' ',
            ' '..='~' => ch as u8,
            '\u{a0}'..='\u{ff}' => ch as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}

impl ReportSink for PdfSink {
    fn write_report(&self, report: &Report, path: &Path) -> Result<(), SinkError> {
        let shown = path.to_string_lossy().to_string();
        let mut doc = Self::build_document(&report.lines()).map_err(|e| SinkError::Pdf {
            path: shown.clone(),
            message: e.to_string(),
        })?;
        let mut writer = BufWriter::new(File::create(path).map_err(|e| SinkError::Io {
            path: shown.clone(),
            source: e,
        })?);
        doc.save_to(&mut writer).map_err(|e| SinkError::Pdf {
            path: shown.clone(),
            message: e.to_string(),
        })?;
        writer.flush().map_err(|e| SinkError::Io {
            path: shown,
            source: e,
        })?;
        info!("PDF report written to '{}'.", path.display());
        Ok(())
    }
}
