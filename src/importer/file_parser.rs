// ==========================================
// Course Schedule Core - File Parsers
// ==========================================
// Tabular file -> ParsedWorkbook of string cells. Everything downstream
// (header detection, normalization, partitioning) works on strings; no
// cell typing leaks out of this module.
// Supports: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

// ==========================================
// ParsedWorkbook
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub name: String,
    /// Raw rows, each an ordered list of cell strings.
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedWorkbook {
    pub file_name: String,
    pub sheets: Vec<ParsedSheet>,
}

impl ParsedWorkbook {
    pub fn new(file_name: impl Into<String>) -> ParsedWorkbook {
        ParsedWorkbook {
            file_name: file_name.into(),
            sheets: Vec::new(),
        }
    }
}

// ==========================================
// CSV parser
// ==========================================
// A CSV file is a single-sheet workbook named after the file stem.
pub struct CsvParser;

impl CsvParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<ParsedWorkbook> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // header detection happens downstream
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }

        let stem = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "sheet".to_string());
        let mut workbook = ParsedWorkbook::new(file_name_of(file_path));
        workbook.sheets.push(ParsedSheet { name: stem, rows });
        Ok(workbook)
    }
}

// ==========================================
// Excel parser
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<ParsedWorkbook> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut excel = open_workbook_auto(file_path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = excel.sheet_names().to_vec();
        if sheet_names.is_empty() {
            return Err(ImportError::EmptyWorkbook);
        }

        let mut workbook = ParsedWorkbook::new(file_name_of(file_path));
        for name in sheet_names {
            let range = excel
                .worksheet_range(&name)
                .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

            let mut rows = Vec::new();
            for data_row in range.rows() {
                let row: Vec<String> = data_row.iter().map(|cell| cell.to_string()).collect();
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                rows.push(row);
            }
            workbook.sheets.push(ParsedSheet { name, rows });
        }
        Ok(workbook)
    }
}

// ==========================================
// Universal parser (extension dispatch)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ParsedWorkbook> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
