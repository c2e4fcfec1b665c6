//! Binary entrypoint for the browser-hosted dessert cart.

#[cfg(target_arch = "wasm32")]
fn main() {
    dessert_cart::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This binary targets the browser. Build it for wasm32 with `trunk serve` or `trunk build`.");
}
