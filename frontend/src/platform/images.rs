use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlImageElement};

use crate::error::Result;
use crate::platform::dom::{listen, set_style};

/// Fades every image present at mount in once it has loaded.
pub fn install(document: &Document) -> Result<usize> {
    let images = document.images();
    let mut count = 0;

    for i in 0..images.length() {
        let Some(image) = images
            .item(i)
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };

        set_style(&image, "opacity", "0");
        set_style(&image, "transition", "opacity 0.3s ease");

        // Cached images may have finished before we got here and never fire `load`.
        if image.complete() && image.natural_width() > 0 {
            set_style(&image, "opacity", "1");
        } else {
            let loaded = image.clone();
            listen(&image, "load", move |_: Event| {
                set_style(&loaded, "opacity", "1");
            })?;
        }
        count += 1;
    }

    Ok(count)
}
