use vote_app::{AppConfig, AppHost, MOUNT_POINT};

fn main() {
    let config = AppConfig::from_build_env();

    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    #[cfg(feature = "csr")]
    {
        let host = AppHost::new(config);

        #[cfg(target_arch = "wasm32")]
        let host = host.with_analytics(page_analytics::GtagSink::new());

        if let Err(e) = host.mount(MOUNT_POINT) {
            log::error!("{e}");
            wasm_bindgen::throw_str(&e.to_string());
        }
    }
}
