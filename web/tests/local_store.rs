#![cfg(target_arch = "wasm32")]

use flagfall_core::BestTimeStore;
use flagfall_web::LocalBestTime;
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn best_time_survives_a_new_store() {
    LocalStorage::clear();
    assert_eq!(LocalBestTime.load_best_time(), None);

    let mut store = LocalBestTime;
    store.save_best_time(42);

    assert_eq!(LocalBestTime.load_best_time(), Some(42));
}

#[wasm_bindgen_test]
fn unreadable_value_reads_as_no_record() {
    LocalStorage::clear();
    LocalStorage::set("flagfall:best-time", "not a number").unwrap();

    assert_eq!(LocalBestTime.load_best_time(), None);
}
