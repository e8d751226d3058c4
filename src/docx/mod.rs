//! Document assembly on top of docx-rs.
//!
//! The writer owns the one growing output document for the whole run. It
//! knows nothing about specification semantics: sections arrive as
//! [`TableSpec`] descriptors and are emitted by a single generic path.
//! Formatting beyond that is fixed here: A4 pages for fresh documents,
//! heading styles, a bullet numbering definition, and the configured font
//! on every table run.

pub mod image;

use crate::config::RenderConfig;
use crate::render::table::{CellContent, CellSpec, ImageRef, TableSpec};
use anyhow::{Context, Result};
use docx_rs::{
    read_docx, AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc,
    LevelText, NumberFormat, Numbering, NumberingId, Paragraph, Pic, Run, RunFonts, ShdType,
    Shading, SpecialIndentType, Start, Style, StyleType, Table, TableCell, TableRow, WidthType,
};
use std::fs;
use std::mem;
use std::path::Path;

/// A4 portrait, in twentieths of a point.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;

/// Numbering definition id reserved for bulleted cell lists.
const BULLET_NUMBERING: usize = 100;

/// Table width in fiftieths of a percent; tables always span the page.
const FULL_WIDTH: usize = 5000;

/// Heading paragraph styles, outermost first.
#[derive(Debug, Clone, Copy)]
pub enum Heading {
    H1,
    H2,
    H3,
}

impl Heading {
    fn style_id(self) -> &'static str {
        match self {
            Heading::H1 => "Heading1",
            Heading::H2 => "Heading2",
            Heading::H3 => "Heading3",
        }
    }
}

/// Writer for one output document.
pub struct DocWriter {
    docx: Docx,
    config: RenderConfig,
}

impl DocWriter {
    /// Start a document: fresh A4 with styles when no template is given,
    /// otherwise the template's content with new material appended after it.
    /// Either way a bullet numbering definition is registered so list cells
    /// render the same in both modes.
    pub fn create(template: Option<&Path>, config: RenderConfig) -> Result<Self> {
        let base = match template {
            Some(path) => {
                let bytes = fs::read(path)
                    .with_context(|| format!("read template document {}", path.display()))?;
                read_docx(&bytes)
                    .with_context(|| format!("open template document {}", path.display()))?
            }
            None => fresh_document(&config),
        };
        let docx = base
            .add_abstract_numbering(bullet_numbering())
            .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));
        Ok(DocWriter { docx, config })
    }

    pub fn heading(&mut self, level: Heading, text: &str) {
        let paragraph = Paragraph::new()
            .style(level.style_id())
            .add_run(Run::new().add_text(text));
        self.push_paragraph(paragraph);
    }

    /// Empty paragraph, used to separate adjacent tables.
    pub fn spacer(&mut self) {
        self.push_paragraph(Paragraph::new());
    }

    pub fn page_break(&mut self) {
        self.push_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
    }

    /// Emit one described table, applying the visibility rules. A table with
    /// no content at all leaves no trace, not even its spacer.
    pub fn table(&mut self, spec: &TableSpec) {
        if !spec.has_content() {
            return;
        }
        if spec.spacer_before {
            self.spacer();
        }
        let rows: Vec<TableRow> = spec
            .visible_rows()
            .map(|row| {
                let cells = row
                    .visible_cells()
                    .map(|cell| self.build_cell(cell, row.fill))
                    .collect();
                TableRow::new(cells)
            })
            .collect();
        let table = Table::new(rows).width(FULL_WIDTH, WidthType::Pct);
        self.docx = mem::take(&mut self.docx).add_table(table);
    }

    pub fn save(self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)
            .with_context(|| format!("create output document {}", path.display()))?;
        self.docx
            .build()
            .pack(file)
            .with_context(|| format!("write output document {}", path.display()))?;
        Ok(())
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.docx = mem::take(&mut self.docx).add_paragraph(paragraph);
    }

    fn build_cell(&self, cell: &CellSpec, fill: Option<&'static str>) -> TableCell {
        let mut table_cell = TableCell::new();
        match &cell.content {
            CellContent::Text(value) => {
                let items = value.items();
                // The bullet glyph only makes sense for an actual list.
                let bullet = cell.bullet && items.len() > 1;
                if items.is_empty() {
                    table_cell = table_cell
                        .add_paragraph(Paragraph::new().add_run(self.styled_run(cell).add_text("")));
                }
                for item in items {
                    table_cell = table_cell.add_paragraph(self.text_paragraph(item, cell, bullet));
                }
            }
            CellContent::Image(image_ref) => {
                table_cell = table_cell.add_paragraph(Paragraph::new());
                table_cell = table_cell.add_paragraph(self.image_paragraph(image_ref));
            }
        }
        if let Some(columns) = cell.colspan {
            table_cell = table_cell.grid_span(columns);
        }
        if let Some(pct) = cell.width_pct {
            table_cell = table_cell.width(pct_fiftieths(pct), WidthType::Pct);
        }
        if let Some(color) = fill {
            table_cell =
                table_cell.shading(Shading::new().shd_type(ShdType::Clear).fill(color));
        }
        table_cell
    }

    /// One paragraph for one text item, with literal `\n` and `\t` escapes
    /// expanded into real breaks and tabs.
    fn text_paragraph(&self, text: &str, cell: &CellSpec, bullet: bool) -> Paragraph {
        let mut paragraph = Paragraph::new();
        if cell.centered {
            paragraph = paragraph.align(AlignmentType::Center);
        }
        if bullet {
            paragraph = paragraph.numbering(
                NumberingId::new(BULLET_NUMBERING),
                IndentLevel::new(0),
            );
        }
        let mut run = self.styled_run(cell);
        if bullet {
            run = run.add_tab();
        }
        for piece in expand_escapes(text) {
            run = match piece {
                TextPiece::Text(segment) => run.add_text(segment),
                TextPiece::Tab => run.add_tab(),
                TextPiece::Break => run.add_break(BreakType::TextWrapping),
            };
        }
        paragraph.add_run(run)
    }

    /// Centered image paragraph. A failed load logs a warning and leaves the
    /// paragraph empty; one bad screenshot never fails the run.
    fn image_paragraph(&self, image_ref: &ImageRef) -> Paragraph {
        let mut paragraph = Paragraph::new().align(AlignmentType::Center);
        match image::load(&image_ref.path, image_ref.width) {
            Ok(embedded) => {
                let pic = Pic::new_with_dimensions(
                    embedded.png,
                    embedded.px_width,
                    embedded.px_height,
                )
                .size(image::emu(embedded.width_pt), image::emu(embedded.height_pt));
                paragraph = paragraph.add_run(Run::new().add_image(pic));
            }
            Err(err) => {
                tracing::warn!("skipping screen image: {err:#}");
            }
        }
        paragraph
    }

    fn styled_run(&self, cell: &CellSpec) -> Run {
        let fonts = RunFonts::new()
            .ascii(self.config.font_family.as_str())
            .hi_ansi(self.config.font_family.as_str());
        let mut run = Run::new().fonts(fonts).size(self.config.half_points());
        if cell.bold {
            run = run.bold();
        }
        run
    }
}

fn fresh_document(config: &RenderConfig) -> Docx {
    let fonts = RunFonts::new()
        .ascii(config.font_family.as_str())
        .hi_ansi(config.font_family.as_str());
    Docx::new()
        .page_size(PAGE_WIDTH, PAGE_HEIGHT)
        .default_fonts(fonts)
        .default_size(config.half_points())
        .add_style(heading_style("Heading1", "heading 1", 32))
        .add_style(heading_style("Heading2", "heading 2", 28))
        .add_style(heading_style("Heading3", "heading 3", 24))
}

fn heading_style(id: &str, name: &str, half_points: usize) -> Style {
    Style::new(id, StyleType::Paragraph)
        .name(name)
        .size(half_points)
        .bold()
}

fn bullet_numbering() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(400), Some(SpecialIndentType::Hanging(360)), None, None),
    )
}

fn pct_fiftieths(pct: f32) -> usize {
    (pct * 50.0) as usize
}

/// Pieces of one text value after expanding the literal two-character
/// escapes `\n` and `\t`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TextPiece<'a> {
    Text(&'a str),
    Tab,
    Break,
}

pub(crate) fn expand_escapes(text: &str) -> Vec<TextPiece<'_>> {
    let mut pieces = Vec::new();
    for (i, line) in text.split("\\n").enumerate() {
        if i > 0 {
            pieces.push(TextPiece::Break);
        }
        for (j, segment) in line.split("\\t").enumerate() {
            if j > 0 {
                pieces.push(TextPiece::Tab);
            }
            if !segment.is_empty() {
                pieces.push(TextPiece::Text(segment));
            }
        }
    }
    pieces
}
