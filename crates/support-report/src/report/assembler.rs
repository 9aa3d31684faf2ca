//! Turns a validated [`ReportRequest`] into the printed support-level form:
//! title block, legal paragraph, the 32-activity table, legend, and footer.

use super::document::{
    Align, Cell, ColumnSpec, ColumnWidth, DocxDocument, TableDocument, TableSpec, TextBlock,
};
use super::domain::{ReportRequest, ReportVariant};
use super::rows::{derive_rows, ActivityRows, ReportRow};
use super::ReportError;
use tracing::debug;

/// Download name of the generated document.
pub const REPORT_FILENAME: &str = "raport-potrzeby-wsparcia.docx";
/// MIME type of the generated document.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const TITLE: &str = "FORMULARZ W ZAKRESIE USTALANIA POZIOMU POTRZEBY WSPARCIA";
const SUBTITLE: &str = "dla osób zaliczonych do stopnia niepełnosprawności";
const DISAGREEMENT_NOTICE: &str = "Powyższe orzeczenie jest niezgodne z opinią Wojewódzkiego \
     Zespołu do Spraw Orzekania o Niepełnosprawności z dnia ……………….";
const DETAILED_INTRO: &str =
    "Poniżej przedstawiam dokonany przeze mnie szczegółowy raport potrzeby wsparcia:";
const LEGEND_HEADING: &str = "LEGENDA:";
const LEGEND_CAPABILITY: &str = "Zdolność samodzielnego wykonania: TAK - osoba wykonuje \
     samodzielnie, NIE - osoba wymaga wsparcia";
const LEGEND_SUPPORT: &str = "Rodzaj wsparcia: WT - wsparcie towarzyszące, WC - wsparcie \
     częściowe, WP - wsparcie pełne, WS - wsparcie szczególne";
const LEGEND_FREQUENCY: &str =
    "Częstotliwość wsparcia: A - zawsze, B - bardzo często, C - często, D - czasami";
const FOOTER_CITATION: &str = "(na podstawie rozporządzenia Ministra Rodziny i Polityki \
     Społecznej z dnia 23 listopada 2023 r., Dz.U. z 2023 r. poz. 2581)";

fn legal_paragraph(final_score: f64) -> String {
    format!(
        "Na podstawie rozporządzenia Ministra Rodziny i Polityki Społecznej z dnia 23 listopada \
         2023 r. (Dz.U. z 2023 r. poz. 2581), ustalam, że opiniowany wymaga wsparcia na poziomie \
         {final_score} pkt przez okres 7 lat."
    )
}

fn score_line(final_score: f64) -> String {
    format!("Poziom potrzeby wsparcia: {final_score} pkt")
}

fn summary_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            caption: "Nr",
            width: ColumnWidth::Pct(5),
        },
        ColumnSpec {
            caption: "Nazwa czynności",
            width: ColumnWidth::Pct(35),
        },
        ColumnSpec {
            caption: "Stopień niepełnosprawności",
            width: ColumnWidth::Pct(20),
        },
        ColumnSpec {
            caption: "Rodzaj wsparcia",
            width: ColumnWidth::Pct(15),
        },
        ColumnSpec {
            caption: "Częstotliwość",
            width: ColumnWidth::Pct(15),
        },
        ColumnSpec {
            caption: "Punkty",
            width: ColumnWidth::Pct(10),
        },
    ]
}

fn detailed_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            caption: "Lp.",
            width: ColumnWidth::Dxa(800),
        },
        ColumnSpec {
            caption: "Czynność związana z obszarami codziennego funkcjonowania",
            width: ColumnWidth::Dxa(3000),
        },
        ColumnSpec {
            caption: "Rodzaj niepełnosprawności",
            width: ColumnWidth::Dxa(1500),
        },
        ColumnSpec {
            caption: "Zdolność samodzielnego wykonania",
            width: ColumnWidth::Dxa(1200),
        },
        ColumnSpec {
            caption: "Rodzaj wsparcia",
            width: ColumnWidth::Dxa(1000),
        },
        ColumnSpec {
            caption: "Częstotliwość",
            width: ColumnWidth::Dxa(1200),
        },
        ColumnSpec {
            caption: "Punkty",
            width: ColumnWidth::Dxa(1200),
        },
    ]
}

fn summary_cells(row: &ReportRow) -> Vec<Cell> {
    let text = |value: &str| Cell {
        text: value.to_string(),
        align: Align::Left,
    };
    let coded = |value: &'static str| {
        // An unmatched code collapses to the "no support" sentinel in the
        // summary layout.
        text(if value.is_empty() {
            super::rows::NO_SUPPORT
        } else {
            value
        })
    };

    vec![
        text(&row.ordinal),
        text(row.activity),
        text(&row.disability),
        coded(row.support_code),
        coded(row.frequency_code),
        text(&row.points),
    ]
}

fn detailed_cells(row: &ReportRow) -> Vec<Cell> {
    let centered = |value: &str| Cell {
        text: value.to_string(),
        align: Align::Center,
    };

    vec![
        centered(&row.ordinal),
        Cell {
            text: row.activity.to_string(),
            align: Align::Left,
        },
        centered(&row.disability),
        centered(row.capability),
        centered(row.support_code),
        centered(row.frequency_code),
        centered(&row.points),
    ]
}

fn table_spec(variant: ReportVariant, groups: &[ActivityRows]) -> TableSpec {
    let (width, font_size, columns, to_cells): (_, _, _, fn(&ReportRow) -> Vec<Cell>) =
        match variant {
            ReportVariant::Summary => (ColumnWidth::Pct(100), None, summary_columns(), summary_cells),
            ReportVariant::Detailed => (
                ColumnWidth::Dxa(9800),
                Some(16),
                detailed_columns(),
                detailed_cells,
            ),
        };

    let rows = groups
        .iter()
        .flat_map(|group| group.rows.iter().map(to_cells))
        .collect();

    TableSpec {
        width,
        font_size,
        columns,
        rows,
    }
}

/// Render the request into DOCX bytes with the default backend.
pub fn render(request: &ReportRequest) -> Result<Vec<u8>, ReportError> {
    render_with(DocxDocument::new(), request)
}

/// Render the request through any [`TableDocument`] backend. Layout order is
/// fixed by the government template and identical for both variants apart
/// from the detailed-only paragraphs and the extra capability column.
pub fn render_with<D: TableDocument>(document: D, request: &ReportRequest) -> Result<Vec<u8>, ReportError> {
    let groups = derive_rows(request);
    let score = request.final_score;
    debug!(
        ?request.variant,
        activities = request.activities.len(),
        "assembling report document"
    );

    let mut document = document
        .with_text(
            TextBlock::new(TITLE, 24)
                .bold()
                .align(Align::Center)
                .spacing(100, 100),
        )
        .with_text(
            TextBlock::new(SUBTITLE, 20)
                .bold()
                .align(Align::Center)
                .spacing(100, 300),
        )
        .with_text(
            TextBlock::new(legal_paragraph(score), 24)
                .align(Align::Justify)
                .spacing(200, 200),
        );

    if request.variant == ReportVariant::Detailed {
        document = document
            .with_text(
                TextBlock::new(DISAGREEMENT_NOTICE, 24)
                    .align(Align::Justify)
                    .spacing(200, 200),
            )
            .with_text(
                TextBlock::new(DETAILED_INTRO, 24)
                    .bold()
                    .align(Align::Justify)
                    .spacing(200, 300),
            );
    }

    let legend_size = match request.variant {
        ReportVariant::Summary => 20,
        ReportVariant::Detailed => 18,
    };

    document
        .with_table(table_spec(request.variant, &groups))
        .with_text(TextBlock::new(LEGEND_HEADING, legend_size).bold().spacing(200, 100))
        .with_text(TextBlock::new(LEGEND_CAPABILITY, 16).spacing(50, 50))
        .with_text(TextBlock::new(LEGEND_SUPPORT, 16).spacing(50, 50))
        .with_text(TextBlock::new(LEGEND_FREQUENCY, 16).spacing(50, 100))
        .with_text(
            TextBlock::new(score_line(score), 24)
                .bold()
                .align(Align::Center)
                .spacing(200, 100),
        )
        .with_text(
            TextBlock::new(FOOTER_CITATION, 18)
                .align(Align::Center)
                .spacing(100, 200),
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::domain::{ActivityAssessment, Assessment, DisabilityType, ScaleSelection};

    fn empty_request(variant: ReportVariant) -> ReportRequest {
        ReportRequest {
            activities: Vec::new(),
            final_score: 0.0,
            variant,
        }
    }

    #[test]
    fn renders_summary_document() {
        let bytes = render(&empty_request(ReportVariant::Summary)).expect("renders");
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn renders_detailed_document() {
        let request = ReportRequest {
            activities: vec![ActivityAssessment {
                activity_index: 0,
                activity_name: "Zmiana pozycji ciała".to_string(),
                assessments: vec![Assessment {
                    id: "a-1".to_string(),
                    disability_type: Some(DisabilityType::Physical),
                    support_level: ScaleSelection {
                        value: 0.99,
                        label: String::new(),
                    },
                    frequency: ScaleSelection {
                        value: 0.95,
                        label: String::new(),
                    },
                    points: 0.9405,
                }],
                max_points: 0.9405,
            }],
            final_score: 1.0,
            variant: ReportVariant::Detailed,
        };
        let bytes = render(&request).expect("renders");
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn rendering_is_deterministic() {
        let request = empty_request(ReportVariant::Summary);
        let first = render(&request).expect("first render");
        let second = render(&request).expect("second render");
        assert_eq!(first, second);
    }

    #[test]
    fn legal_paragraph_interpolates_the_score() {
        let text = legal_paragraph(87.0);
        assert!(text.contains("na poziomie 87 pkt"));
        assert!(text.contains("przez okres 7 lat"));
    }

    #[test]
    fn score_line_echoes_fractional_scores_verbatim() {
        assert_eq!(score_line(78.5), "Poziom potrzeby wsparcia: 78.5 pkt");
        assert_eq!(score_line(0.0), "Poziom potrzeby wsparcia: 0 pkt");
    }
}
