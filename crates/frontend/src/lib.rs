pub mod app;
pub mod domain;
pub mod shared;
pub mod usecases;

use shared::dom::web::WebDom;
use std::rc::Rc;
use usecases::u501_cpf_screening::DatasourceScreening;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn mount() {
    let Some(dom) = WebDom::from_window() else {
        log::error!("No document to mount on");
        return;
    };

    let config = app::load_config(&dom);
    let screening = Rc::new(DatasourceScreening::new(&config.screening.url));
    let mounted = app::App::mount(dom, &config, screening);

    if !mounted.errors.is_empty() {
        log::warn!("{} module(s) failed to mount", mounted.errors.len());
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount();
}
