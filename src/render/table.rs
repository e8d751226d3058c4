//! Declarative table descriptors and their visibility rules.
//!
//! Sections describe their tables as plain data; a single generic emission
//! path in the document writer consumes them. Whether a table, row, or cell
//! appears at all is decided here, from blankness alone, so the rules stay
//! testable without touching the document format.

use crate::spec::TextList;
use std::path::PathBuf;

/// What a cell holds: text paragraphs, or one embedded screen image.
#[derive(Debug, Clone)]
pub enum CellContent {
    Text(TextList),
    Image(ImageRef),
}

/// A screen image to embed: resolved path plus requested display width in
/// points (0 = default).
#[derive(Debug, Clone)]
pub struct ImageRef {
    pub path: PathBuf,
    pub width: u32,
}

/// One cell of a described table.
#[derive(Debug, Clone)]
pub struct CellSpec {
    pub content: CellContent,
    pub bold: bool,
    pub colspan: Option<usize>,
    pub width_pct: Option<f32>,
    pub bullet: bool,
    pub centered: bool,
    pub allow_empty: bool,
}

impl CellSpec {
    fn with_content(content: CellContent) -> Self {
        CellSpec {
            content,
            bold: false,
            colspan: None,
            width_pct: None,
            bullet: false,
            centered: false,
            allow_empty: false,
        }
    }

    /// Cell showing a scalar-or-list field as one paragraph per item.
    pub fn text(value: &TextList) -> Self {
        Self::with_content(CellContent::Text(value.clone()))
    }

    /// Cell showing one fixed line of text.
    pub fn line(value: impl Into<String>) -> Self {
        Self::with_content(CellContent::Text(TextList::new([value.into()])))
    }

    /// Bold fixed text, used for labels and section headers.
    pub fn label(value: impl Into<String>) -> Self {
        Self::line(value).bold()
    }

    /// Cell embedding a screen image. Never counts as blank.
    pub fn image(image: ImageRef) -> Self {
        Self::with_content(CellContent::Image(image))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn span(mut self, columns: usize) -> Self {
        self.colspan = Some(columns);
        self
    }

    pub fn width(mut self, pct: f32) -> Self {
        self.width_pct = Some(pct);
        self
    }

    /// Render items as a bulleted list when there is more than one.
    pub fn bullet(mut self) -> Self {
        self.bullet = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Keep this cell even when blank, for fixed-column tables where
    /// alignment matters more than suppression.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn is_blank(&self) -> bool {
        match &self.content {
            CellContent::Text(value) => value.is_blank(),
            CellContent::Image(_) => false,
        }
    }
}

/// When a described row survives into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRule {
    /// Keep the row if at least one cell is non-blank; blank cells in the
    /// kept row are omitted unless flagged `allow_empty`.
    AnyCell,
    /// Keep the row only when every cell is non-blank. Used for label/value
    /// pairs where a label without a value says nothing.
    AllCells,
}

/// One row of a described table.
#[derive(Debug, Clone)]
pub struct RowSpec {
    pub cells: Vec<CellSpec>,
    pub rule: RowRule,
    pub fill: Option<&'static str>,
}

impl RowSpec {
    /// Row kept when any cell is populated.
    pub fn any(cells: Vec<CellSpec>) -> Self {
        RowSpec {
            cells,
            rule: RowRule::AnyCell,
            fill: None,
        }
    }

    /// Row kept only when every cell is populated.
    pub fn all(cells: Vec<CellSpec>) -> Self {
        RowSpec {
            cells,
            rule: RowRule::AllCells,
            fill: None,
        }
    }

    /// Background shading for every cell in the row (hex, no `#`).
    pub fn fill(mut self, color: &'static str) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn visible(&self) -> bool {
        let populated = self.cells.iter().filter(|cell| !cell.is_blank()).count();
        match self.rule {
            RowRule::AnyCell => populated > 0,
            RowRule::AllCells => populated == self.cells.len(),
        }
    }

    /// Cells that survive into the emitted row.
    pub fn visible_cells(&self) -> impl Iterator<Item = &CellSpec> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_blank() || cell.allow_empty)
    }
}

/// A full described table: candidate rows plus whether an empty spacer
/// paragraph precedes it.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub rows: Vec<RowSpec>,
    pub spacer_before: bool,
}

impl TableSpec {
    pub fn new(rows: Vec<RowSpec>) -> Self {
        TableSpec {
            rows,
            spacer_before: false,
        }
    }

    pub fn spaced(rows: Vec<RowSpec>) -> Self {
        TableSpec {
            rows,
            spacer_before: true,
        }
    }

    /// A table is emitted only when something in it is non-blank; label-only
    /// rows count, so tables with fixed headers render even around sparse
    /// data.
    pub fn has_content(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.cells.iter().any(|cell| !cell.is_blank()))
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &RowSpec> {
        self.rows.iter().filter(|row| row.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> CellSpec {
        CellSpec::text(&TextList::default())
    }

    #[test]
    fn all_cells_row_needs_every_cell_populated() {
        let complete = RowSpec::all(vec![CellSpec::label("Mode"), CellSpec::line("Batch")]);
        assert!(complete.visible());

        let partial = RowSpec::all(vec![CellSpec::label("Mode"), blank()]);
        assert!(!partial.visible());
    }

    #[test]
    fn any_cell_row_drops_blank_cells() {
        let row = RowSpec::any(vec![CellSpec::line("CUSTOMER"), blank()]);
        assert!(row.visible());
        assert_eq!(row.visible_cells().count(), 1);
    }

    #[test]
    fn allow_empty_keeps_blank_cells_in_place() {
        let row = RowSpec::any(vec![
            CellSpec::line("1"),
            blank().allow_empty(),
            CellSpec::line("I"),
        ]);
        assert!(row.visible());
        assert_eq!(row.visible_cells().count(), 3);
    }

    #[test]
    fn fully_blank_any_row_disappears() {
        let row = RowSpec::any(vec![blank(), blank()]);
        assert!(!row.visible());
    }

    #[test]
    fn table_without_content_is_suppressed() {
        let empty = TableSpec::new(vec![RowSpec::any(vec![blank(), blank()])]);
        assert!(!empty.has_content());

        let labeled = TableSpec::new(vec![RowSpec::any(vec![CellSpec::label("Resource")])]);
        assert!(labeled.has_content());
    }

    #[test]
    fn visible_rows_apply_per_row_rules() {
        let table = TableSpec::new(vec![
            RowSpec::any(vec![CellSpec::label("Program ID"), blank()]),
            RowSpec::all(vec![CellSpec::label("Mode"), blank()]),
        ]);
        assert_eq!(table.visible_rows().count(), 1);
    }

    #[test]
    fn image_cells_always_count_as_content() {
        let cell = CellSpec::image(ImageRef {
            path: PathBuf::from("shots/a.png"),
            width: 0,
        });
        assert!(!cell.is_blank());
    }

    #[test]
    fn whitespace_only_text_is_blank() {
        let cell = CellSpec::text(&TextList::new(["  ", ""]));
        assert!(cell.is_blank());
    }
}
