//! PDF rendering of computed report layouts

use printpdf::{
    path::{PaintMode, WindingOrder},
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use super::{
    layout::{
        LabelLayout, StatusTone, TableLayout, LABEL_HEIGHT, LABEL_TEXT_X, LEFT_MARGIN,
        PAGE_HEIGHT, PAGE_WIDTH, QR_SIZE, RIGHT_MARGIN, TABLE_COLUMNS, TABLE_HEADER_Y,
        TABLE_RULE_Y, TOP_MARGIN,
    },
    qr::QrMatrix,
};
use crate::error::{AppError, AppResult};

pub const TABLE_TITLE: &str = "Reporte de Inventario - Sistema de Mantenimiento GNB";
pub const LABELS_TITLE: &str = "Etiquetas de Activos - GNB";

/// PDF points to printpdf millimetres
fn pt(value: f32) -> Mm {
    Mm(value * 25.4 / 72.0)
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn black() -> Color {
    rgb(0.0, 0.0, 0.0)
}

fn red() -> Color {
    rgb(0.8, 0.0, 0.0)
}

fn green() -> Color {
    rgb(0.0, 0.5, 0.0)
}

fn light_grey() -> Color {
    rgb(0.8, 0.8, 0.8)
}

fn pdf_error(e: printpdf::Error) -> AppError {
    AppError::Report(format!("PDF error: {:?}", e))
}

/// A document with every page created up front
struct Canvas {
    doc: PdfDocumentReference,
    pages: Vec<PdfLayerReference>,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Canvas {
    fn new(title: &str, page_count: usize) -> AppResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, pt(PAGE_WIDTH), pt(PAGE_HEIGHT), "Página 1");
        let mut pages = vec![doc.get_page(page).get_layer(layer)];
        for n in 1..page_count.max(1) {
            let (page, layer) =
                doc.add_page(pt(PAGE_WIDTH), pt(PAGE_HEIGHT), format!("Página {}", n + 1));
            pages.push(doc.get_page(page).get_layer(layer));
        }

        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;

        Ok(Self { doc, pages, regular, bold })
    }

    fn page(&self, index: usize) -> AppResult<&PdfLayerReference> {
        self.pages
            .get(index)
            .ok_or_else(|| AppError::Report(format!("Layout refers to missing page {}", index)))
    }

    fn finish(self) -> AppResult<Vec<u8>> {
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}

fn horizontal_rule(layer: &PdfLayerReference, y: f32, color: Color, thickness: f32) {
    layer.set_outline_color(color);
    layer.set_outline_thickness(thickness);
    layer.add_line(Line {
        points: vec![
            (Point::new(pt(LEFT_MARGIN), pt(y)), false),
            (Point::new(pt(RIGHT_MARGIN), pt(y)), false),
        ],
        is_closed: false,
    });
}

/// Draw `matrix` as filled squares with its top-left corner at (x, top)
fn draw_qr(layer: &PdfLayerReference, matrix: &QrMatrix, x: f32, top: f32, size: f32) {
    let module = size / matrix.width() as f32;
    let rings: Vec<Vec<(Point, bool)>> = matrix
        .dark_runs()
        .into_iter()
        .map(|run| {
            let x0 = x + run.start as f32 * module;
            let x1 = x0 + run.len as f32 * module;
            let y1 = top - run.row as f32 * module;
            let y0 = y1 - module;
            vec![
                (Point::new(pt(x0), pt(y0)), false),
                (Point::new(pt(x1), pt(y0)), false),
                (Point::new(pt(x1), pt(y1)), false),
                (Point::new(pt(x0), pt(y1)), false),
            ]
        })
        .collect();

    layer.set_fill_color(black());
    layer.add_polygon(Polygon {
        rings,
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

/// Render the tabular inventory report
pub fn render_table(layout: &TableLayout, generated_at: &str) -> AppResult<Vec<u8>> {
    let canvas = Canvas::new(TABLE_TITLE, layout.pages)?;

    let first = canvas.page(0)?;
    first.set_fill_color(black());
    first.use_text(TABLE_TITLE, 16.0, pt(LEFT_MARGIN), pt(TOP_MARGIN), &canvas.bold);
    first.use_text(
        format!("Generado: {}", generated_at),
        9.0,
        pt(LEFT_MARGIN),
        pt(TABLE_RULE_Y + 7.0),
        &canvas.regular,
    );
    horizontal_rule(first, TABLE_RULE_Y, black(), 1.0);
    for (title, x) in TABLE_COLUMNS {
        first.use_text(title, 10.0, pt(x), pt(TABLE_HEADER_Y), &canvas.bold);
    }

    for row in &layout.rows {
        let layer = canvas.page(row.page)?;
        let color = match row.tone {
            StatusTone::Fault => red(),
            StatusTone::Normal => black(),
        };
        layer.set_fill_color(color);

        let cells = [
            row.id.to_string(),
            row.nombre.clone(),
            row.serial.clone(),
            row.ubicacion.clone(),
            row.estado.clone(),
        ];
        for ((_, x), text) in TABLE_COLUMNS.iter().zip(cells) {
            layer.use_text(text, 9.0, pt(*x), pt(row.y), &canvas.regular);
        }

        layer.set_fill_color(black());
    }

    canvas.finish()
}

/// Render one QR-coded label per asset
pub fn render_labels(layout: &LabelLayout) -> AppResult<Vec<u8>> {
    let canvas = Canvas::new(LABELS_TITLE, layout.pages)?;

    let first = canvas.page(0)?;
    first.set_fill_color(black());
    first.use_text(LABELS_TITLE, 16.0, pt(LEFT_MARGIN), pt(TOP_MARGIN), &canvas.bold);

    for label in &layout.labels {
        let layer = canvas.page(label.page)?;
        let matrix = QrMatrix::encode(&label.qr_payload)?;
        draw_qr(layer, &matrix, LEFT_MARGIN, label.top, QR_SIZE);

        layer.set_fill_color(black());
        layer.use_text(label.nombre.as_str(), 12.0, pt(LABEL_TEXT_X), pt(label.top - 12.0), &canvas.bold);
        layer.use_text(
            format!("Serial: {}", label.serial),
            10.0,
            pt(LABEL_TEXT_X),
            pt(label.top - 28.0),
            &canvas.regular,
        );
        layer.use_text(
            format!("Ubicación: {}", label.ubicacion),
            10.0,
            pt(LABEL_TEXT_X),
            pt(label.top - 42.0),
            &canvas.regular,
        );

        let status_color = match label.tone {
            StatusTone::Fault => red(),
            StatusTone::Normal => green(),
        };
        layer.set_fill_color(status_color);
        layer.use_text(
            format!("Estado: {}", label.estado),
            10.0,
            pt(LABEL_TEXT_X),
            pt(label.top - 56.0),
            &canvas.bold,
        );
        layer.set_fill_color(black());

        horizontal_rule(layer, label.top - LABEL_HEIGHT + 2.0, light_grey(), 0.5);
    }

    canvas.finish()
}
