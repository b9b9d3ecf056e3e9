//! School report: a ranked athlete table rendered as an A4 PDF.
//!
//! Building the table (`SchoolReport::build`) and laying it out on pages is kept
//! apart from drawing it, so the content can be checked without parsing PDF.

use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference,
    Point, Rect, Rgb,
};
use printpdf::path::PaintMode;

use crate::error::ReportError;
use crate::models::{Athlete, Belt, School};
use crate::services::ranking::sort_ranking;

pub const REPORT_HEADER: [&str; 5] = ["Ranking", "Nombre Completo", "Edad", "Cinturón", "Puntos"];

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_X: f32 = 15.0;
const TITLE_Y: f32 = 15.0;
const FIRST_TABLE_Y: f32 = TITLE_Y + 18.0;
const NEXT_TABLE_Y: f32 = 40.0;
const TABLE_BOTTOM_Y: f32 = 280.0;
const FOOTER_Y: f32 = 287.0;
const ROW_HEIGHT: f32 = 9.5;
const CELL_PADDING: f32 = 3.0;
const COLUMN_WIDTHS: [f32; 5] = [25.0, 70.0, 20.0, 35.0, 30.0];

const PRIMARY: (u8, u8, u8) = (245, 68, 0);
const ALTERNATE_ROW: (u8, u8, u8) = (245, 245, 245);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub position: usize,
    pub full_name: String,
    pub age: u32,
    pub belt: Belt,
    pub points: u32,
}

impl ReportRow {
    pub fn cells(&self) -> [String; 5] {
        [
            self.position.to_string(),
            self.full_name.clone(),
            self.age.to_string(),
            self.belt.to_string(),
            self.points.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolReport {
    pub title: String,
    pub subtitle: String,
    pub rows: Vec<ReportRow>,
}

impl SchoolReport {
    /// Ranks `athletes` and turns them into table rows under a title block.
    /// An empty list gives a header-only table.
    pub fn build(school: &School, athletes: &[Athlete], generated_on: NaiveDate) -> Self {
        let rows = sort_ranking(athletes.to_vec())
            .into_iter()
            .enumerate()
            .map(|(idx, athlete)| ReportRow {
                position: idx + 1,
                full_name: athlete.full_name(),
                age: athlete.edad,
                belt: athlete.cinturon,
                points: athlete.ranking,
            })
            .collect();

        Self {
            title: school.label.clone(),
            subtitle: format!("Reporte de Atletas - {}", generated_on.format("%d/%m/%Y")),
            rows,
        }
    }

    /// Splits the rows across pages. The table starts under the title block on the
    /// first page and under the top margin on the others. There is always at least
    /// one page.
    pub fn pages(&self) -> Vec<&[ReportRow]> {
        let first = rows_fitting(FIRST_TABLE_Y);
        let next = rows_fitting(NEXT_TABLE_Y);

        let (head, mut rest) = self.rows.split_at(first.min(self.rows.len()));
        let mut pages = vec![head];
        while !rest.is_empty() {
            let (page, tail) = rest.split_at(next.min(rest.len()));
            pages.push(page);
            rest = tail;
        }
        pages
    }

    pub fn render(&self) -> Result<Vec<u8>, ReportError> {
        let pages = self.pages();
        let page_count = pages.len();

        let (doc, first_page, first_layer) =
            PdfDocument::new(self.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Tabla");
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_error)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_error)?,
        };

        let mut first_row_index = 0;
        for (page_idx, rows) in pages.iter().enumerate() {
            let layer = if page_idx == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Tabla");
                doc.get_page(page).get_layer(layer)
            };

            let table_y = if page_idx == 0 {
                self.draw_title_block(&layer, &fonts);
                FIRST_TABLE_Y
            } else {
                NEXT_TABLE_Y
            };

            draw_table(&layer, &fonts, table_y, rows, first_row_index);
            draw_footer(&layer, &fonts, page_idx + 1, page_count);
            first_row_index += rows.len();
        }

        doc.save_to_bytes().map_err(render_error)
    }

    fn draw_title_block(&self, layer: &PdfLayerReference, fonts: &Fonts) {
        layer.set_fill_color(rgb(PRIMARY));
        layer.use_text(self.title.as_str(), 18.0, Mm(MARGIN_X), from_top(TITLE_Y), &fonts.bold);

        layer.set_fill_color(gray(100));
        layer.use_text(self.subtitle.as_str(), 11.0, Mm(MARGIN_X), from_top(TITLE_Y + 6.0), &fonts.regular);

        layer.set_outline_color(rgb(PRIMARY));
        layer.set_outline_thickness(mm_to_pt(0.5));
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_X), from_top(TITLE_Y + 10.0)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN_X), from_top(TITLE_Y + 10.0)), false),
            ],
            is_closed: false,
        });
    }
}

/// Renders the report of `school` in one call.
pub fn generate_school_report(
    school: &School,
    athletes: &[Athlete],
    generated_on: NaiveDate,
) -> Result<Vec<u8>, ReportError> {
    SchoolReport::build(school, athletes, generated_on).render()
}

/// Name of the downloaded file, e.g. `reporte_dojo-okinawa_2025-03-18.pdf`.
pub fn report_filename(school_value: &str, generated_on: NaiveDate) -> String {
    format!("reporte_{}_{}.pdf", school_value, generated_on.format("%Y-%m-%d"))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Data rows that fit under the header row when the table starts at `top`.
fn rows_fitting(top: f32) -> usize {
    let slots = ((TABLE_BOTTOM_Y - top) / ROW_HEIGHT).floor() as usize;
    slots.saturating_sub(1).max(1)
}

fn draw_table(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    top: f32,
    rows: &[ReportRow],
    first_row_index: usize,
) {
    let header = REPORT_HEADER.map(String::from);
    draw_row(layer, &fonts.bold, top, &header, Some(PRIMARY), gray(255));

    for (offset, row) in rows.iter().enumerate() {
        let y = top + ROW_HEIGHT * (offset + 1) as f32;
        let fill = ((first_row_index + offset) % 2 == 1).then_some(ALTERNATE_ROW);
        draw_row(layer, &fonts.regular, y, &row.cells(), fill, gray(0));
    }
}

fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    top: f32,
    cells: &[String; 5],
    fill: Option<(u8, u8, u8)>,
    text_color: Color,
) {
    let mut x = MARGIN_X;
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        let rect = Rect::new(Mm(x), from_top(top + ROW_HEIGHT), Mm(x + width), from_top(top));

        if let Some(color) = fill {
            layer.set_fill_color(rgb(color));
            layer.add_rect(rect.clone().with_mode(PaintMode::Fill));
        }

        layer.set_outline_color(gray(200));
        layer.set_outline_thickness(mm_to_pt(0.1));
        layer.add_rect(rect.with_mode(PaintMode::Stroke));

        layer.set_fill_color(text_color.clone());
        layer.use_text(
            cell.as_str(),
            10.0,
            Mm(x + CELL_PADDING),
            from_top(top + ROW_HEIGHT - CELL_PADDING),
            font,
        );

        x += width;
    }
}

fn draw_footer(layer: &PdfLayerReference, fonts: &Fonts, page: usize, page_count: usize) {
    let text = format!("Página {} de {}", page, page_count);
    // Helvetica averages roughly half an em per glyph.
    let approx_width = text.chars().count() as f32 * 10.0 * 0.5 * 0.3528;

    layer.set_fill_color(gray(150));
    layer.use_text(
        text.as_str(),
        10.0,
        Mm((PAGE_WIDTH - approx_width) / 2.0),
        from_top(FOOTER_Y),
        &fonts.regular,
    );
}

/// PDF coordinates grow upwards from the bottom edge.
fn from_top(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

fn mm_to_pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, None))
}

fn gray(level: u8) -> Color {
    rgb((level, level, level))
}

fn render_error(error: impl std::fmt::Debug) -> ReportError {
    ReportError::Render(format!("{:?}", error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn school() -> School {
        seed::schools().remove(2)
    }

    fn athletes_with_points(points: &[u32]) -> Vec<Athlete> {
        let mut athletes = seed::generate_athletes(&seed::schools(), 2025, points.len() as u32);
        for (athlete, &p) in athletes.iter_mut().zip(points) {
            athlete.ranking = p;
        }
        athletes
    }

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
    }

    #[test]
    fn test_rows_are_ranked_by_points() {
        let athletes = athletes_with_points(&[1200, 1500, 900]);
        let report = SchoolReport::build(&school(), &athletes, generated_on());

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].position, 1);
        assert_eq!(report.rows[0].points, 1500);
        assert_eq!(report.rows[0].full_name, athletes[1].full_name());
        assert_eq!(report.rows[1].points, 1200);
        assert_eq!(report.rows[2].points, 900);
    }

    #[test]
    fn test_title_block() {
        let report = SchoolReport::build(&school(), &[], generated_on());
        assert_eq!(report.title, "Dojo Okinawa");
        assert_eq!(report.subtitle, "Reporte de Atletas - 18/03/2025");
    }

    #[test]
    fn test_cells_follow_header_columns() {
        let athletes = athletes_with_points(&[1200]);
        let report = SchoolReport::build(&school(), &athletes, generated_on());
        let cells = report.rows[0].cells();

        assert_eq!(cells.len(), REPORT_HEADER.len());
        assert_eq!(cells[0], "1");
        assert_eq!(cells[1], athletes[0].full_name());
        assert_eq!(cells[2], athletes[0].edad.to_string());
        assert_eq!(cells[3], athletes[0].cinturon.label());
        assert_eq!(cells[4], "1200");
    }

    #[test]
    fn test_empty_report_has_one_header_only_page() {
        let report = SchoolReport::build(&school(), &[], generated_on());
        let pages = report.pages();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_long_reports_span_pages_without_losing_rows() {
        let points: Vec<u32> = (0..120).map(|i| 3000 - i * 10).collect();
        let report = SchoolReport::build(&school(), &athletes_with_points(&points), generated_on());
        let pages = report.pages();

        assert!(pages.len() > 1);
        assert_eq!(pages[0].len(), rows_fitting(FIRST_TABLE_Y));
        assert_eq!(pages[1].len(), rows_fitting(NEXT_TABLE_Y));
        let positions: Vec<usize> = pages.iter().flat_map(|p| p.iter().map(|r| r.position)).collect();
        assert_eq!(positions, (1..=120).collect::<Vec<_>>());
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let athletes = athletes_with_points(&[1200, 1500, 900]);
        let bytes = generate_school_report(&school(), &athletes, generated_on()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_report() {
        let bytes = generate_school_report(&school(), &[], generated_on()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(
            report_filename("dojo-okinawa", generated_on()),
            "reporte_dojo-okinawa_2025-03-18.pdf"
        );
    }
}
