#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = guardrail_web::browser::start() {
        web_sys::console::error_1(&err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("guardrail_web runs in the browser; build it for wasm32-unknown-unknown or use the `guardrail` CLI");
}
