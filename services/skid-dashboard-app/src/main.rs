//! Trunk entry point for the Skidwatch dashboard

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
        log::info!("mounting skidwatch dashboard");
        leptos::mount::mount_to_body(skid_dashboard_app::App);
    }
}
