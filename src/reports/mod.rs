//! Inventory reports: a tabular listing and a sheet of QR asset labels

pub mod layout;
pub mod pdf;
pub mod qr;

pub use layout::{label_layout, qr_payload, table_layout, LabelLayout, StatusTone, TableLayout};

/// Download name of the tabular report
pub const TABLE_FILENAME: &str = "inventario_gnb.pdf";
/// Download name of the label sheet
pub const LABELS_FILENAME: &str = "etiquetas_qr_gnb.pdf";
