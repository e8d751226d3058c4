//! Shared infrastructure for end-to-end rendering tests.
//!
//! Each test drives the compiled binary against YAML fixtures in a temp
//! directory, then reads the produced .docx back with docx-rs and asserts
//! on the document tree.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use docx_rs::{
    read_docx, Docx, DocumentChild, Paragraph, ParagraphChild, RunChild, TableCell,
    TableCellContent, TableChild, TableRowChild,
};

/// Run the compiled binary with the given arguments.
pub fn run_specdoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_specdoc"))
        .args(args)
        .output()
        .expect("spawn specdoc")
}

/// Run the binary and panic with its stderr if the exit status is non-zero.
pub fn render(args: &[&str]) -> Output {
    let output = run_specdoc(args);
    assert!(
        output.status.success(),
        "specdoc failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Write one fixture file under `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Write a valid PNG of the given pixel size, for screen image fixtures.
pub fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbaImage::new(width, height)
        .save(path)
        .expect("write png fixture");
}

/// Build a minimal one-paragraph document to use as a template.
pub fn write_template(path: &Path, text: &str) {
    let file = std::fs::File::create(path).expect("create template");
    docx_rs::Docx::new()
        .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(text)))
        .build()
        .pack(file)
        .expect("pack template");
}

/// Read a produced .docx back into its document tree.
pub fn read_back(path: &Path) -> Docx {
    let bytes = std::fs::read(path).expect("read rendered document");
    read_docx(&bytes).expect("parse rendered document")
}

/// Text of one paragraph: run texts concatenated, with tabs and breaks
/// folded back into `\t` and `\n`.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for piece in &run.children {
                match piece {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// Top-level paragraph texts in order, with spacers and page breaks dropped.
pub fn body_texts(docx: &Docx) -> Vec<String> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect()
}

/// Every table in document order, as per-cell text. Paragraphs within a
/// cell are joined with `\n`.
pub fn table_texts(docx: &Docx) -> Vec<Vec<Vec<String>>> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Table(table) => Some(
                table
                    .rows
                    .iter()
                    .map(|row| {
                        let TableChild::TableRow(row) = row;
                        row.cells
                            .iter()
                            .map(|cell| {
                                let TableRowChild::TableCell(cell) = cell;
                                cell_text(cell)
                            })
                            .collect()
                    })
                    .collect(),
            ),
            _ => None,
        })
        .collect()
}

fn cell_text(cell: &TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether any run anywhere in the document carries an inline image.
pub fn has_drawing(docx: &Docx) -> bool {
    docx.document.children.iter().any(|child| match child {
        DocumentChild::Paragraph(p) => paragraph_has_drawing(p),
        DocumentChild::Table(table) => table.rows.iter().any(|row| {
            let TableChild::TableRow(row) = row;
            row.cells.iter().any(|cell| {
                let TableRowChild::TableCell(cell) = cell;
                cell.children.iter().any(|content| match content {
                    TableCellContent::Paragraph(p) => paragraph_has_drawing(p),
                    _ => false,
                })
            })
        }),
        _ => false,
    })
}

fn paragraph_has_drawing(paragraph: &Paragraph) -> bool {
    paragraph.children.iter().any(|child| match child {
        ParagraphChild::Run(run) => run
            .children
            .iter()
            .any(|piece| matches!(piece, RunChild::Drawing(_))),
        _ => false,
    })
}
