//! Page-level configuration read from the browser location.

use web_sys::UrlSearchParams;

const BACKEND_PARAM: &str = "backend";

/// Value of the `backend` query parameter in `search` (e.g. `"?backend=http://host"`).
pub fn backend_url_from_query(search: &str) -> Option<String> {
    let params = match UrlSearchParams::new_with_str(search) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("Unparseable query string {:?}: {:?}", search, e);
            return None;
        }
    };
    params
        .get(BACKEND_PARAM)
        .filter(|value| !value.trim().is_empty())
}

/// Backend URL override from the current page's query string, if any.
pub fn page_backend_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    backend_url_from_query(&search)
}
