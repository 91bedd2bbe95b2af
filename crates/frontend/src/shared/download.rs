//! PDF downloads and print views served by the back office
use crate::shared::api_utils::{api_url, get_bytes, ApiError};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Receipt file name for a sale
pub fn receipt_filename(sale_id: i64) -> String {
    format!("venta_{}.pdf", sale_id)
}

pub fn sale_label_path(sale_id: i64) -> String {
    format!("/pdf/sale/{}/label", sale_id)
}

pub fn day_labels_path(date: chrono::NaiveDate) -> String {
    format!("/pdf/shipments/day/{}/labels", date.format("%Y-%m-%d"))
}

/// Fetch the sale's PDF and save it as `venta_{id}.pdf`
pub async fn download_receipt(sale_id: i64) -> Result<(), ApiError> {
    let bytes = get_bytes(&sale_label_path(sale_id)).await?;
    let blob = create_pdf_blob(&bytes).map_err(ApiError::Parse)?;
    download_blob(&blob, &receipt_filename(sale_id)).map_err(ApiError::Parse)
}

/// Open a back-office path (print views, labels) in a new tab
pub fn open_in_new_tab(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window
        .open_with_url_and_target(&api_url(path), "_blank")
        .is_err()
    {
        log::error!("could not open {}", path);
    }
}

fn create_pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Failed to cast to HtmlAnchorElement")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke object URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_paths() {
        assert_eq!(receipt_filename(42), "venta_42.pdf");
        assert_eq!(sale_label_path(42), "/pdf/sale/42/label");
        let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(day_labels_path(day), "/pdf/shipments/day/2024-06-03/labels");
    }
}
