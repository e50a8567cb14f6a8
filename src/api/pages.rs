//! Browser-facing routes: dashboard and initial setup

use axum::{extract::State, response::Html};

use crate::{
    error::AppResult,
    models::equipment::Equipo,
    reports::StatusTone,
    repository::equipment::SeedOutcome,
};

pub const SEEDED_MESSAGE: &str = "✅ Inventario Inicial Cargado con Éxito. ¡La Base de Datos responde!";
pub const ALREADY_SEEDED_MESSAGE: &str = "¡El inventario ya tiene datos! No es necesario inicializar.";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_dashboard(equipos: &[Equipo]) -> String {
    let rows: String = equipos
        .iter()
        .map(|e| {
            let class = match StatusTone::of(&e.estado) {
                StatusTone::Fault => "falla",
                StatusTone::Normal => "operativo",
            };
            format!(
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                class,
                e.id,
                escape(&e.nombre),
                escape(&e.tipo),
                escape(e.serial_or_empty()),
                escape(&e.ubicacion),
                escape(&e.estado),
                escape(&e.observaciones),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Sistema de Mantenimiento GNB</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: .4rem; text-align: left; }}
tr.falla td {{ color: #c00; font-weight: bold; }}
</style>
</head>
<body>
<h1>Sistema de Mantenimiento GNB</h1>
<p>{} equipos registrados &middot; <a href="/exportar-pdf">Exportar PDF</a> &middot; <a href="/exportar-qr">Etiquetas QR</a></p>
<table>
<thead><tr><th>ID</th><th>Equipo</th><th>Tipo</th><th>Serial</th><th>Ubicación</th><th>Estado</th><th>Observaciones</th></tr></thead>
<tbody>
{}</tbody>
</table>
</body>
</html>
"#,
        equipos.len(),
        rows
    )
}

/// Dashboard listing the whole inventory
pub async fn dashboard(State(state): State<crate::AppState>) -> AppResult<Html<String>> {
    let equipos = state.services.equipment.list().await?;
    Ok(Html(render_dashboard(&equipos)))
}

/// Load the demo inventory once
pub async fn setup_inicial(State(state): State<crate::AppState>) -> AppResult<&'static str> {
    match state.services.equipment.seed().await? {
        SeedOutcome::Seeded(_) => Ok(SEEDED_MESSAGE),
        SeedOutcome::AlreadySeeded => Ok(ALREADY_SEEDED_MESSAGE),
    }
}
