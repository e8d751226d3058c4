//! Section tables for one feature.
//!
//! Each section describes its table and lets the visibility rules decide
//! what survives. All fixed labels, fills, and column widths live here, so
//! changing the document's look never touches the emission path.

use super::gherkin::split_keyword;
use super::table::{CellSpec, ImageRef, RowSpec, TableSpec};
use crate::spec::{Env, Feature, Input, Others, Parameter, Resource, Scenario, Screen, TextList};
use std::path::Path;

/// Fill for section header rows.
const HEADER_FILL: &str = "ced4da";
/// Fill for column headers and per-item captions.
const SUBHEADER_FILL: &str = "e9ecef";
/// Label column width in percent.
const LABEL_WIDTH: f32 = 20.0;
/// Scenario keyword column width in percent.
const KEYWORD_WIDTH: f32 = 10.0;

/// All section tables for one feature, in their fixed order. `image_dir` is
/// the directory screen image paths resolve against.
pub fn feature_sections(feature: &Feature, image_dir: &Path) -> Vec<TableSpec> {
    let mut sections = vec![program_table(feature)];
    if let Some(table) = environment_table(&feature.env) {
        sections.push(table);
    }
    if let Some(table) = resources_table(&feature.resources) {
        sections.push(table);
    }
    sections.extend(screen_tables(&feature.screens, image_dir));
    if let Some(table) = input_table(&feature.input) {
        sections.push(table);
    }
    if let Some(table) = parameters_table(&feature.parameters) {
        sections.push(table);
    }
    if let Some(table) = scenarios_table(&feature.scenarios) {
        sections.push(table);
    }
    if let Some(table) = others_table(&feature.others) {
        sections.push(table);
    }
    sections
}

/// Identity block. The ID row always renders so every feature leaves at
/// least a labeled stub; the other pairs require a value.
fn program_table(feature: &Feature) -> TableSpec {
    TableSpec::new(vec![
        RowSpec::any(vec![
            CellSpec::label("Program ID").width(LABEL_WIDTH),
            CellSpec::text(&feature.id),
        ])
        .fill(HEADER_FILL),
        RowSpec::all(vec![CellSpec::label("Mode"), CellSpec::text(&feature.mode)]),
        RowSpec::all(vec![
            CellSpec::label("Program Name"),
            CellSpec::text(&feature.name),
        ]),
        RowSpec::all(vec![
            CellSpec::label("Description"),
            CellSpec::text(&feature.desc),
        ]),
    ])
}

/// Environment block, directly under the identity block with no spacer so
/// the two read as one table.
fn environment_table(env: &Env) -> Option<TableSpec> {
    if env.is_blank() {
        return None;
    }
    Some(TableSpec::new(vec![
        RowSpec::any(vec![CellSpec::label("Program Environment").span(2)]).fill(HEADER_FILL),
        RowSpec::all(vec![
            CellSpec::label("Program Source").width(LABEL_WIDTH),
            CellSpec::text(&env.sources),
        ]),
        RowSpec::all(vec![
            CellSpec::label("Language").width(LABEL_WIDTH),
            CellSpec::text(&env.languages),
        ]),
    ]))
}

fn resources_table(resources: &[Resource]) -> Option<TableSpec> {
    if resources.is_empty() {
        return None;
    }
    let mut rows = vec![
        RowSpec::any(vec![CellSpec::label("Resource").span(2)]).fill(HEADER_FILL),
        RowSpec::any(vec![CellSpec::label("Table/File"), CellSpec::label("Usage")])
            .fill(SUBHEADER_FILL),
    ];
    for resource in resources {
        rows.push(RowSpec::any(vec![
            CellSpec::text(&resource.name),
            CellSpec::text(&resource.usage),
        ]));
    }
    Some(TableSpec::spaced(rows))
}

/// One outer header table, then one table per screen. Adjacent tables share
/// borders in the output, so the group reads as a single section.
fn screen_tables(screens: &[Screen], image_dir: &Path) -> Vec<TableSpec> {
    if screens.is_empty() {
        return Vec::new();
    }
    let mut tables = vec![TableSpec::spaced(vec![RowSpec::any(vec![
        CellSpec::label("Screen:").span(2),
    ])
    .fill(HEADER_FILL)])];
    for screen in screens {
        let mut rows = vec![
            RowSpec::any(vec![
                CellSpec::label("Screen ID").width(LABEL_WIDTH),
                CellSpec::label("Name"),
            ])
            .fill(SUBHEADER_FILL),
            RowSpec::any(vec![
                CellSpec::text(&screen.id).width(LABEL_WIDTH),
                CellSpec::text(&screen.name),
            ]),
        ];
        if screen.image.is_present() {
            rows.push(RowSpec::any(vec![CellSpec::image(ImageRef {
                path: image_dir.join(&screen.image.file),
                width: screen.image.width,
            })
            .span(2)]));
        }
        tables.push(TableSpec::new(rows));
    }
    tables
}

fn input_table(input: &[Input]) -> Option<TableSpec> {
    if input.is_empty() {
        return None;
    }
    let mut rows = vec![RowSpec::any(vec![CellSpec::label("Input").span(2)]).fill(HEADER_FILL)];
    for (index, item) in input.iter().enumerate() {
        rows.push(
            RowSpec::any(vec![CellSpec::label(caption(index, &item.name)).span(2)])
                .fill(SUBHEADER_FILL),
        );
        rows.push(RowSpec::all(vec![
            CellSpec::label("Fields").width(LABEL_WIDTH),
            CellSpec::text(&item.fields),
        ]));
        rows.push(RowSpec::all(vec![
            CellSpec::label("Constraints").width(LABEL_WIDTH),
            CellSpec::text(&item.constraints).bullet(),
        ]));
        rows.push(RowSpec::all(vec![
            CellSpec::label("Remarks").width(LABEL_WIDTH),
            CellSpec::text(&item.remarks).bullet(),
        ]));
    }
    Some(TableSpec::spaced(rows))
}

/// Fixed five-column table. Data cells render even when blank so columns
/// stay aligned across rows.
fn parameters_table(parameters: &[Parameter]) -> Option<TableSpec> {
    if parameters.is_empty() {
        return None;
    }
    let mut rows = vec![
        RowSpec::any(vec![CellSpec::label("Parameters").span(5)]).fill(HEADER_FILL),
        RowSpec::any(vec![
            CellSpec::label("ID"),
            CellSpec::label("Fields"),
            CellSpec::line("Data Items"),
            CellSpec::label("I/O").centered(),
            CellSpec::label("Processing Remarks"),
        ])
        .fill(SUBHEADER_FILL),
    ];
    for (index, parameter) in parameters.iter().enumerate() {
        rows.push(RowSpec::any(vec![
            CellSpec::line((index + 1).to_string()),
            CellSpec::text(&parameter.field).allow_empty(),
            CellSpec::text(&parameter.data).allow_empty(),
            CellSpec::text(&parameter.io).allow_empty(),
            CellSpec::text(&parameter.remarks).allow_empty(),
        ]));
    }
    Some(TableSpec::spaced(rows))
}

fn scenarios_table(scenarios: &[Scenario]) -> Option<TableSpec> {
    if scenarios.is_empty() {
        return None;
    }
    let mut rows = vec![RowSpec::any(vec![
        CellSpec::label("Scenarios and Processing Logic").span(2),
    ])
    .fill(HEADER_FILL)];
    for (index, scenario) in scenarios.iter().enumerate() {
        rows.push(
            RowSpec::any(vec![CellSpec::label(caption(index, &scenario.name)).span(2)])
                .fill(SUBHEADER_FILL),
        );
        for line in &scenario.desc {
            let (keyword, action) = split_keyword(line);
            rows.push(RowSpec::any(vec![
                CellSpec::label(keyword).width(KEYWORD_WIDTH),
                CellSpec::line(action),
            ]));
        }
    }
    Some(TableSpec::spaced(rows))
}

/// Trailing sections: a one-column table of label/value pairs, populated
/// entries only.
fn others_table(others: &Others) -> Option<TableSpec> {
    let mut rows = Vec::new();
    for (label, value) in others.entries() {
        if value.is_blank() {
            continue;
        }
        rows.push(RowSpec::any(vec![CellSpec::line(label)]).fill(HEADER_FILL));
        rows.push(RowSpec::any(vec![CellSpec::text(value).bullet()]));
    }
    if rows.is_empty() {
        None
    } else {
        Some(TableSpec::spaced(rows))
    }
}

/// Numbered caption for list items, 1-based.
fn caption(index: usize, name: &TextList) -> String {
    format!("{}. {}", index + 1, name.joined())
}

#[cfg(test)]
#[path = "feature_tests.rs"]
mod tests;
