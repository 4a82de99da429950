#[cfg(not(feature = "csr"))]
pub fn main() {
    // no main without the `csr` feature; the crate is a library for tests
}

#[cfg(feature = "csr")]
pub fn main() {
    // to run: `trunk serve --open`
    use gamerack::app::App;

    console_error_panic_hook::set_once();
    gamerack::utils::panic_hook::init();

    leptos::mount_to_body(App);
}
