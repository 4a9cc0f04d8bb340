use web_sys::{Storage, Window};

pub fn browser_window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    browser_window()?
        .local_storage()
        .map_err(|_| "localStorage is not accessible".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())
}

/// Non-blank value stored under `key`.
pub fn read_item(key: &str) -> Result<Option<String>, String> {
    let value = local_storage()?
        .get_item(key)
        .map_err(|_| format!("Failed to read '{}' from localStorage", key))?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

pub fn remove_item(key: &str) -> Result<(), String> {
    local_storage()?
        .remove_item(key)
        .map_err(|_| format!("Failed to remove '{}' from localStorage", key))
}

/// Opens the browser print dialog for the current document.
pub fn print_window() -> Result<(), String> {
    browser_window()?
        .print()
        .map_err(|_| "window.print() failed".to_string())
}
