//! Minimal word-processing builder seam.
//!
//! The assembler describes the report as text blocks and one table; the
//! [`TableDocument`] trait keeps that description independent of the
//! underlying document library. [`DocxDocument`] is the docx-rs backend.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, LineSpacing, Paragraph, Run, RunFonts, Table, TableCell, TableRow,
    WidthType,
};

use super::ReportError;

/// Single font family used throughout the form.
pub const BODY_FONT: &str = "Times New Roman";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Justify,
}

/// One free-standing paragraph. Sizes are OOXML half-points.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub text: String,
    pub size: usize,
    pub bold: bool,
    pub align: Align,
    pub spacing_before: u32,
    pub spacing_after: u32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, size: usize) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            align: Align::Left,
            spacing_before: 0,
            spacing_after: 0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing_before = before;
        self.spacing_after = after;
        self
    }
}

/// Column widths mirror the two template variants: proportional for the
/// summary layout, absolute twentieths-of-a-point for the detailed one.
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    Pct(usize),
    Dxa(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub caption: &'static str,
    pub width: ColumnWidth,
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub align: Align,
}

/// Complete table description: bold centered header captions followed by
/// data rows. `font_size` of `None` keeps the document default.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub width: ColumnWidth,
    pub font_size: Option<usize>,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<Cell>>,
}

/// Builder interface the assembler writes against.
pub trait TableDocument: Sized {
    fn with_text(self, block: TextBlock) -> Self;
    fn with_table(self, spec: TableSpec) -> Self;
    fn finish(self) -> Result<Vec<u8>, ReportError>;
}

/// docx-rs backed document.
#[derive(Default)]
pub struct DocxDocument {
    docx: Docx,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self { docx: Docx::new() }
    }
}

fn alignment(align: Align) -> AlignmentType {
    match align {
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
        // OOXML spells full justification "both".
        Align::Justify => AlignmentType::Both,
    }
}

// w:pct table widths are expressed in fiftieths of a percent.
fn width_value(width: ColumnWidth) -> (usize, WidthType) {
    match width {
        ColumnWidth::Pct(percent) => (percent * 50, WidthType::Pct),
        ColumnWidth::Dxa(twips) => (twips, WidthType::Dxa),
    }
}

fn sized_run(text: &str, size: Option<usize>) -> Run {
    let run = Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(BODY_FONT));
    match size {
        Some(size) => run.size(size),
        None => run,
    }
}

fn cell_paragraph(cell: &Cell, font_size: Option<usize>) -> Paragraph {
    Paragraph::new()
        .align(alignment(cell.align))
        .add_run(sized_run(&cell.text, font_size))
}

impl TableDocument for DocxDocument {
    fn with_text(mut self, block: TextBlock) -> Self {
        let mut run = sized_run(&block.text, Some(block.size));
        if block.bold {
            run = run.bold();
        }

        let mut paragraph = Paragraph::new().align(alignment(block.align)).add_run(run);
        if block.spacing_before > 0 || block.spacing_after > 0 {
            paragraph = paragraph.line_spacing(
                LineSpacing::new()
                    .before(block.spacing_before)
                    .after(block.spacing_after),
            );
        }

        self.docx = self.docx.add_paragraph(paragraph);
        self
    }

    fn with_table(mut self, spec: TableSpec) -> Self {
        let mut rows = Vec::with_capacity(spec.rows.len() + 1);

        let header = spec
            .columns
            .iter()
            .map(|column| {
                let run = sized_run(column.caption, spec.font_size).bold();
                let paragraph = Paragraph::new()
                    .align(AlignmentType::Center)
                    .add_run(run);
                let (value, width_type) = width_value(column.width);
                TableCell::new().add_paragraph(paragraph).width(value, width_type)
            })
            .collect();
        rows.push(TableRow::new(header));

        for row in &spec.rows {
            let cells = row
                .iter()
                .map(|cell| TableCell::new().add_paragraph(cell_paragraph(cell, spec.font_size)))
                .collect();
            rows.push(TableRow::new(cells));
        }

        let (value, width_type) = width_value(spec.width);
        self.docx = self.docx.add_table(Table::new(rows).width(value, width_type));
        self
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        let mut buffer = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut buffer)
            .map_err(|err| ReportError::Docx(err.to_string()))?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_produces_a_zip_container() {
        let bytes = DocxDocument::new()
            .with_text(TextBlock::new("nagłówek", 24).bold().align(Align::Center))
            .finish()
            .expect("document packs");
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn tables_accept_both_width_models() {
        let spec = TableSpec {
            width: ColumnWidth::Pct(100),
            font_size: None,
            columns: vec![
                ColumnSpec {
                    caption: "Nr",
                    width: ColumnWidth::Pct(5),
                },
                ColumnSpec {
                    caption: "Punkty",
                    width: ColumnWidth::Dxa(1200),
                },
            ],
            rows: vec![vec![
                Cell {
                    text: "1".to_string(),
                    align: Align::Center,
                },
                Cell {
                    text: "0".to_string(),
                    align: Align::Center,
                },
            ]],
        };

        let bytes = DocxDocument::new()
            .with_table(spec)
            .finish()
            .expect("document packs");
        assert!(!bytes.is_empty());
    }
}
