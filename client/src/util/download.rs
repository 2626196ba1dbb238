//! Save a binary API response as a local file download.
//!
//! Builds an object URL over an in-memory blob and clicks a synthetic anchor
//! with the derived filename, which is how the admin export reaches disk.

/// Trigger a browser download of `bytes` under `filename`.
///
/// # Errors
///
/// Returns a message when the blob or anchor cannot be constructed (or when
/// not running in a browser).
pub fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array);

        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
            .map_err(|_| "no se pudo crear el archivo".to_owned())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "no se pudo crear la descarga".to_owned())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no hay documento".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(|_| "no se pudo crear el enlace".to_owned())?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "no se pudo crear el enlace".to_owned())?;

        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (filename, bytes);
        Err("not available outside the browser".to_owned())
    }
}
