//! Page layout for the inventory reports
//!
//! Layout is computed as plain data (page index, vertical position, display
//! strings) before anything is drawn. Coordinates are PDF points on a US
//! Letter page, measured from the bottom edge.

use crate::models::equipment::{Equipo, ESTADO_FALLA};

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const LEFT_MARGIN: f32 = 50.0;
pub const RIGHT_MARGIN: f32 = 562.0;
/// Where the cursor restarts on a continuation page
pub const TOP_MARGIN: f32 = 750.0;

pub const TABLE_RULE_Y: f32 = 725.0;
pub const TABLE_HEADER_Y: f32 = 705.0;
pub const TABLE_FIRST_ROW_Y: f32 = 685.0;
pub const ROW_HEIGHT: f32 = 20.0;
pub const TABLE_BOTTOM_MARGIN: f32 = 50.0;
pub const NOMBRE_MAX_CHARS: usize = 30;
pub const SERIAL_MAX_CHARS: usize = 15;
pub const UBICACION_MAX_CHARS: usize = 20;
/// The status column ends at the right margin
pub const ESTADO_MAX_CHARS: usize = 10;

/// (title, x) for each table column
pub const TABLE_COLUMNS: [(&str, f32); 5] = [
    ("ID", 50.0),
    ("Equipo", 90.0),
    ("Serial", 290.0),
    ("Ubicación", 380.0),
    ("Estado", 510.0),
];

pub const LABEL_FIRST_Y: f32 = 700.0;
pub const LABEL_HEIGHT: f32 = 80.0;
/// A label never starts below this line
pub const LABEL_BOTTOM_THRESHOLD: f32 = 150.0;
pub const QR_SIZE: f32 = 70.0;
pub const LABEL_TEXT_X: f32 = 135.0;
/// Longest name or location line that fits between the label text and the right margin
pub const LABEL_TEXT_MAX_CHARS: usize = 55;

/// How a record's status is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Fault,
}

impl StatusTone {
    pub fn of(estado: &str) -> Self {
        if estado == ESTADO_FALLA {
            StatusTone::Fault
        } else {
            StatusTone::Normal
        }
    }
}

/// Keep the first `max` characters of `s`
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Text encoded in an asset's QR code
pub fn qr_payload(equipo: &Equipo) -> String {
    format!("ID:{}\nSN:{}\n{}", equipo.id, equipo.serial_or_empty(), equipo.nombre)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub page: usize,
    pub y: f32,
    pub id: i64,
    pub nombre: String,
    pub serial: String,
    pub ubicacion: String,
    pub estado: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub pages: usize,
    pub rows: Vec<TableRow>,
}

pub fn table_layout(equipos: &[Equipo]) -> TableLayout {
    let mut rows = Vec::with_capacity(equipos.len());
    let mut page = 0;
    let mut y = TABLE_FIRST_ROW_Y;

    for equipo in equipos {
        if y < TABLE_BOTTOM_MARGIN {
            page += 1;
            y = TOP_MARGIN;
        }
        rows.push(TableRow {
            page,
            y,
            id: equipo.id,
            nombre: truncate(&equipo.nombre, NOMBRE_MAX_CHARS),
            serial: truncate(equipo.serial_or_empty(), SERIAL_MAX_CHARS),
            ubicacion: truncate(&equipo.ubicacion, UBICACION_MAX_CHARS),
            estado: truncate(&equipo.estado, ESTADO_MAX_CHARS),
            tone: StatusTone::of(&equipo.estado),
        });
        y -= ROW_HEIGHT;
    }

    TableLayout { pages: page + 1, rows }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub page: usize,
    /// Top edge of the label band
    pub top: f32,
    pub qr_payload: String,
    pub nombre: String,
    pub serial: String,
    pub ubicacion: String,
    pub estado: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub pages: usize,
    pub labels: Vec<Label>,
}

pub fn label_layout(equipos: &[Equipo]) -> LabelLayout {
    let mut labels = Vec::with_capacity(equipos.len());
    let mut page = 0;
    let mut top = LABEL_FIRST_Y;

    for equipo in equipos {
        if top < LABEL_BOTTOM_THRESHOLD {
            page += 1;
            top = LABEL_FIRST_Y;
        }
        labels.push(Label {
            page,
            top,
            qr_payload: qr_payload(equipo),
            nombre: truncate(&equipo.nombre, LABEL_TEXT_MAX_CHARS),
            serial: equipo.serial_or_empty().to_string(),
            ubicacion: truncate(&equipo.ubicacion, LABEL_TEXT_MAX_CHARS),
            estado: equipo.estado.clone(),
            tone: StatusTone::of(&equipo.estado),
        });
        top -= LABEL_HEIGHT;
    }

    LabelLayout { pages: page + 1, labels }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipo(id: i64, estado: &str) -> Equipo {
        Equipo {
            id,
            nombre: format!("Equipo {}", id),
            tipo: "Sensor".to_string(),
            serial: Some(format!("SN-{}", id)),
            ubicacion: "Piso 1".to_string(),
            estado: estado.to_string(),
            observaciones: String::new(),
        }
    }

    fn inventory(n: i64) -> Vec<Equipo> {
        (1..=n).map(|id| equipo(id, "Operativo")).collect()
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Sótano 1 - Cuarto Control", 8), "Sótano 1");
        assert_eq!(truncate("corto", 30), "corto");
    }

    #[test]
    fn test_table_rows_follow_store_order() {
        let layout = table_layout(&inventory(3));
        let ids: Vec<i64> = layout.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(layout.rows[0].y, TABLE_FIRST_ROW_Y);
        assert_eq!(layout.rows[1].y, TABLE_FIRST_ROW_Y - ROW_HEIGHT);
        assert_eq!(layout.pages, 1);
    }

    #[test]
    fn test_table_truncates_display_fields() {
        let mut e = equipo(1, "Operativo");
        e.nombre = "N".repeat(45);
        e.serial = Some("S".repeat(50));
        e.ubicacion = "U".repeat(45);
        e.estado = "Fuera de servicio".to_string();
        let row = &table_layout(&[e]).rows[0];
        assert_eq!(row.nombre.chars().count(), NOMBRE_MAX_CHARS);
        assert_eq!(row.serial.chars().count(), SERIAL_MAX_CHARS);
        assert_eq!(row.ubicacion.chars().count(), UBICACION_MAX_CHARS);
        assert_eq!(row.estado, "Fuera de s");
    }

    #[test]
    fn test_labels_truncate_long_lines_but_encode_full_name() {
        let mut e = equipo(1, "Operativo");
        e.nombre = "Ñ".repeat(100);
        e.ubicacion = "Á".repeat(100);
        let label = &label_layout(&[e.clone()]).labels[0];

        assert_eq!(label.nombre.chars().count(), LABEL_TEXT_MAX_CHARS);
        assert_eq!(label.ubicacion.chars().count(), LABEL_TEXT_MAX_CHARS);
        assert!(label.qr_payload.ends_with(&e.nombre));
    }

    #[test]
    fn test_table_paginates_below_bottom_margin() {
        // 685, 665, ..., 65 fit on the first page: 32 rows
        let layout = table_layout(&inventory(32));
        assert_eq!(layout.pages, 1);

        let layout = table_layout(&inventory(33));
        assert_eq!(layout.pages, 2);
        let row = &layout.rows[32];
        assert_eq!(row.page, 1);
        assert_eq!(row.y, TOP_MARGIN);
        assert!(layout.rows.iter().all(|r| r.y >= TABLE_BOTTOM_MARGIN));
    }

    #[test]
    fn test_fault_rows_are_distinguished() {
        let layout = table_layout(&[equipo(1, "Operativo"), equipo(2, "Falla"), equipo(3, "Revisión")]);
        let tones: Vec<StatusTone> = layout.rows.iter().map(|r| r.tone).collect();
        assert_eq!(tones, vec![StatusTone::Normal, StatusTone::Fault, StatusTone::Normal]);
    }

    #[test]
    fn test_qr_payload_format() {
        let e = equipo(7, "Operativo");
        assert_eq!(qr_payload(&e), "ID:7\nSN:SN-7\nEquipo 7");

        let legacy = Equipo { serial: None, ..e };
        assert_eq!(qr_payload(&legacy), "ID:7\nSN:\nEquipo 7");
    }

    #[test]
    fn test_labels_seven_per_page() {
        let layout = label_layout(&inventory(8));
        assert_eq!(layout.pages, 2);
        assert!(layout.labels[..7].iter().all(|l| l.page == 0));
        assert_eq!(layout.labels[6].top, LABEL_FIRST_Y - 6.0 * LABEL_HEIGHT);
        assert_eq!(layout.labels[7].page, 1);
        assert_eq!(layout.labels[7].top, LABEL_FIRST_Y);
        assert!(layout.labels.iter().all(|l| l.top >= LABEL_BOTTOM_THRESHOLD));
    }

    #[test]
    fn test_each_label_carries_its_own_payload() {
        let equipos = inventory(4);
        let layout = label_layout(&equipos);
        for (label, e) in layout.labels.iter().zip(&equipos) {
            assert_eq!(label.qr_payload, qr_payload(e));
        }
    }

    #[test]
    fn test_empty_inventory_still_has_a_page() {
        assert_eq!(table_layout(&[]).pages, 1);
        assert_eq!(label_layout(&[]).pages, 1);
    }
}
