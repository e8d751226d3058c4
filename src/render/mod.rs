//! Rendering: specification tree in, document structure out.
//!
//! The walk is strictly sequential and mirrors input order: files as
//! resolved and sorted, then modules, then features. All conditional logic
//! lives in the section descriptors.

pub mod feature;
pub mod gherkin;
pub mod table;

use crate::docx::{DocWriter, Heading};
use crate::spec::SpecFile;
use feature::feature_sections;

/// Title heading emitted above every file's content.
const DOCUMENT_TITLE: &str = "PROGRAM DESCRIPTION";

/// Walk the loaded files and emit the whole document: a title per file, a
/// heading per module with a trailing page break, and per feature a
/// sub-heading followed by its section tables.
pub fn render_document(writer: &mut DocWriter, files: &[SpecFile]) {
    for file in files {
        writer.heading(Heading::H1, DOCUMENT_TITLE);
        for module in &file.spec.modules {
            writer.heading(Heading::H2, &module.name);
            for feature in &module.features {
                writer.spacer();
                writer.heading(Heading::H3, &feature.name.joined());
                for section in feature_sections(feature, file.image_dir()) {
                    writer.table(&section);
                }
            }
            writer.page_break();
        }
    }
}
