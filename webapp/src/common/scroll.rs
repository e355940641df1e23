use web_sys::window;

// ScrollLock
//
// scoped scroll suppression for the detail overlay: acquiring sets
// overflow: hidden on <body> and widens padding-right by the vanished
// scrollbar's width so the layout does not jump; dropping the lock restores
// the inline styles that were there before.  components hold it in a hook
// so release is tied to unmount.
#[derive(Debug)]
pub struct ScrollLock {
    overflow: String,
    padding_right: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<ScrollLock> {
        let window = window()?;
        let document = window.document()?;
        let body = document.body()?;
        let root = document.document_element()?;

        let style = body.style();
        let overflow = style.get_property_value("overflow").unwrap_or_default();
        let padding_right = style
            .get_property_value("padding-right")
            .unwrap_or_default();

        let inner_width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let scrollbar = (inner_width - f64::from(root.client_width())).max(0.0);

        style.set_property("overflow", "hidden").ok()?;
        style
            .set_property("padding-right", &format!("{scrollbar}px"))
            .ok()?;

        Some(ScrollLock {
            overflow,
            padding_right,
        })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(body) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };

        let style = body.style();

        let overflow = if self.overflow.is_empty() {
            "auto"
        } else {
            self.overflow.as_str()
        };
        let _ = style.set_property("overflow", overflow);
        let _ = style.set_property("padding-right", &self.padding_right);
    }
}
