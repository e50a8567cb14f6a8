//! QR encoding for asset labels

use qrcode::{Color, QrCode};

use crate::error::{AppError, AppResult};

/// Square module grid of an encoded QR symbol
#[derive(Debug, Clone)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

/// A horizontal stretch of dark modules on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkRun {
    pub row: usize,
    pub start: usize,
    pub len: usize,
}

impl QrMatrix {
    pub fn encode(payload: &str) -> AppResult<Self> {
        let code = QrCode::new(payload.as_bytes())
            .map_err(|e| AppError::Report(format!("QR encoding failed: {}", e)))?;

        let width = code.width();
        let dark = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        Ok(Self { width, dark })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Dark modules merged into horizontal runs, row by row from the top
    pub fn dark_runs(&self) -> Vec<DarkRun> {
        let mut runs = Vec::new();
        for row in 0..self.width {
            let mut x = 0;
            while x < self.width {
                if self.is_dark(x, row) {
                    let start = x;
                    while x < self.width && self.is_dark(x, row) {
                        x += 1;
                    }
                    runs.push(DarkRun { row, start, len: x - start });
                } else {
                    x += 1;
                }
            }
        }
        runs
    }
}
