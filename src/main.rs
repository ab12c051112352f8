#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "portfolio runs in the browser. Build it with `trunk build --release` and serve `dist/`; \
         `cargo test` covers the interaction logic natively."
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
