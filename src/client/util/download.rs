use base64::{engine::general_purpose::STANDARD, Engine};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::error::Error;

/// Hands `bytes` to the browser as a file download named `filename`.
///
/// Must be awaited from within the Dioxus runtime (an event handler or task).
pub async fn trigger_download(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), Error> {
    tracing::debug!("Triggering download of {filename} ({} bytes)", bytes.len());

    document::eval(&download_script(filename, mime, bytes))
        .await
        .map_err(|err| Error::DownloadError(err.to_string()))?;

    Ok(())
}

fn download_script(filename: &str, mime: &str, bytes: &[u8]) -> String {
    let encoded = STANDARD.encode(bytes);
    format!(
        r#"
        const link = document.createElement("a");
        link.href = "data:{mime};base64,{encoded}";
        link.download = {filename:?};
        document.body.appendChild(link);
        link.click();
        link.remove();
        return null;
        "#
    )
}
