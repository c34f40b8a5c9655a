use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Session {
    pub(crate) inner: untangle::Session,
    // Pending settle ticket from the last zero-crossing drag end. The JS
    // side schedules confirm_settle after settle_delay_ms.
    pub(crate) pending: Option<untangle::SettleTicket>,
}

impl Session {
    pub fn rs_new(width: f32, height: f32) -> Session {
        let mut inner = untangle::Session::with_extents(untangle::Extents { width, height });
        inner.set_clock(js_sys::Date::now);
        Session {
            inner,
            pending: None,
        }
    }
}
