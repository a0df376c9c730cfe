use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::load_manifest;
use crate::utils::{format_date, format_file_size, truncate_string};
use prettytable::{Table, format, row};
use std::path::PathBuf;
use tracing::warn;

pub fn cmd_list_docs(
    config: &AppConfig,
    manifest: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = manifest.unwrap_or_else(|| config.manifest.clone());
    let docs = load_manifest(&path)?;

    if docs.is_empty() {
        println!("  no documents in {}", path.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["ID", "Name", "Size", "Uploaded"]);

    for doc in &docs {
        table.add_row(row![
            doc.id,
            truncate_string(&doc.name, config.name_front_chars, config.name_back_chars),
            format_file_size(doc.size_bytes),
            display_date(&doc.uploaded_at),
        ]);
    }

    table.printstd();
    println!("{} documents", docs.len());

    Ok(())
}

pub fn cmd_show_doc(
    config: &AppConfig,
    id: &str,
    manifest: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = manifest.unwrap_or_else(|| config.manifest.clone());
    let docs = load_manifest(&path)?;

    let doc = docs
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| AppError::DocumentNotFound(id.to_string()))?;

    println!("ID:       {}", doc.id);
    println!("Name:     {}", doc.name);
    println!("Size:     {} ({} bytes)", format_file_size(doc.size_bytes), doc.size_bytes);
    println!("Uploaded: {}", format_date(&doc.uploaded_at)?);

    Ok(())
}

// A bad timestamp in one record should not kill the whole listing
fn display_date(raw: &str) -> String {
    match format_date(raw) {
        Ok(rendered) => rendered,
        Err(e) => {
            warn!("{}", e);
            raw.to_string()
        }
    }
}
