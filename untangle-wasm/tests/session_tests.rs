use js_sys::{Float32Array, Reflect, Uint32Array};
use serde::Deserialize;
use untangle_wasm::Session;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(obj: &JsValue, k: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(k)).unwrap()
}

#[wasm_bindgen_test]
fn load_and_read_back() {
    let mut s = Session::new(800.0, 600.0);
    assert_eq!(s.state(), "idle");
    assert!(s.load_graph("k4"));
    assert_eq!(s.state(), "explore");
    assert_eq!(s.vertex_count(), 4);
    assert_eq!(s.edge_count(), 6);
    assert_eq!(s.crossing_count(), 1);

    let vd = s.get_vertex_data();
    let ids = Uint32Array::new(&field(&vd, "ids"));
    let pos = Float32Array::new(&field(&vd, "positions"));
    let labels = js_sys::Array::from(&field(&vd, "labels"));
    assert_eq!(ids.length(), 4);
    assert_eq!(pos.length(), 8);
    assert_eq!(labels.length(), 4);
    assert_eq!(labels.get(0).as_string().unwrap(), "A");

    let ed = s.get_edge_data();
    let endpoints = Uint32Array::new(&field(&ed, "endpoints"));
    assert_eq!(endpoints.length(), 12);

    let cd = s.get_crossing_data();
    let points = Float32Array::new(&field(&cd, "points"));
    assert_eq!(points.length(), 2);
}

#[wasm_bindgen_test]
fn unknown_family_reports_error_envelope() {
    let mut s = Session::new(800.0, 600.0);
    assert!(!s.load_graph("petersen"));
    assert_eq!(s.state(), "idle");

    let res = s.load_graph_res("petersen");
    assert_eq!(field(&res, "ok"), JsValue::from_bool(false));
    let err = field(&res, "error");
    assert_eq!(field(&err, "code").as_string().unwrap(), "unknown_family");
}

#[wasm_bindgen_test]
fn move_vertex_res_validates() {
    let mut s = Session::new(800.0, 600.0);
    let res = s.move_vertex_res(0, 10.0, 10.0);
    assert_eq!(
        field(&field(&res, "error"), "code").as_string().unwrap(),
        "no_graph"
    );

    s.load_graph("k4");
    let res = s.move_vertex_res(0, f32::NAN, 10.0);
    assert_eq!(
        field(&field(&res, "error"), "code").as_string().unwrap(),
        "non_finite"
    );
    let res = s.move_vertex_res(99, 10.0, 10.0);
    assert_eq!(
        field(&field(&res, "error"), "code").as_string().unwrap(),
        "invalid_id"
    );
    let res = s.move_vertex_res(0, 100.0, 100.0);
    assert_eq!(field(&res, "ok"), JsValue::from_bool(true));
}

#[wasm_bindgen_test]
fn guided_walkthrough_and_settle() {
    let mut s = Session::new(800.0, 600.0);
    s.load_graph("k4");

    #[derive(Deserialize)]
    struct Step {
        ordinal: f64,
        total: f64,
        title: String,
    }

    let first: Step = serde_wasm_bindgen::from_value(s.start_guided()).unwrap();
    assert_eq!(first.ordinal as u32, 1);
    assert_eq!(first.total as u32, 3);
    assert_eq!(first.title, "Initial Layout");
    assert_eq!(s.state(), "guided");

    s.next_step();
    let last: Step = serde_wasm_bindgen::from_value(s.next_step()).unwrap();
    assert_eq!(last.ordinal as u32, 3);
    assert_eq!(s.crossing_count(), 0);
    s.exit_guided();

    assert!(s.end_drag());
    let verdict = s.confirm_settle();
    assert_eq!(verdict.as_string().unwrap(), "known_planar");
    // Ticket is consumed.
    assert!(s.confirm_settle().is_null());
}

#[wasm_bindgen_test]
fn reload_cancels_pending_settle() {
    let mut s = Session::new(800.0, 600.0);
    s.load_graph("k4");
    s.start_guided();
    s.next_step();
    s.next_step();
    s.exit_guided();
    assert!(s.end_drag());
    s.load_graph("k5");
    assert!(s.confirm_settle().is_null());
}

#[wasm_bindgen_test]
fn guided_unavailable_for_non_planar_families() {
    let mut s = Session::new(800.0, 600.0);
    s.load_graph("k33");
    assert!(!s.has_solution());
    assert!(s.start_guided().is_null());
    let res = s.start_guided_res();
    assert_eq!(
        field(&field(&res, "error"), "code").as_string().unwrap(),
        "no_solution"
    );
}

#[wasm_bindgen_test]
fn trace_and_snapshot() {
    let mut s = Session::new(800.0, 600.0);
    s.load_graph("cube");

    #[derive(Deserialize)]
    struct Entry {
        message: String,
        category: String,
    }
    let trace: Vec<Entry> = serde_wasm_bindgen::from_value(s.get_trace()).unwrap();
    assert_eq!(trace.len(), 1);
    assert_eq!(trace[0].message, "Loaded Cube Graph");
    assert_eq!(trace[0].category, "info");

    s.clear_trace();
    let trace: Vec<Entry> = serde_wasm_bindgen::from_value(s.get_trace()).unwrap();
    assert!(trace.is_empty());

    let snap = s.to_json();
    assert_eq!(field(&snap, "family").as_string().unwrap(), "cube");
    assert_eq!(field(&snap, "state").as_string().unwrap(), "explore");
}

#[wasm_bindgen_test]
fn random_family_settings() {
    let mut s = Session::new(800.0, 600.0);
    s.load_graph("random");
    assert_eq!(s.vertex_count(), 6);
    s.set_vertex_count(9);
    assert_eq!(s.vertex_count(), 9);

    let res = s.set_edge_density_res(2.0);
    assert_eq!(
        field(&field(&res, "error"), "code").as_string().unwrap(),
        "out_of_range"
    );
    let res = s.set_vertex_count_res(0);
    assert_eq!(
        field(&field(&res, "error"), "code").as_string().unwrap(),
        "out_of_range"
    );
}
