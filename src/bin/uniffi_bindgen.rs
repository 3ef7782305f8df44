//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates Swift or Kotlin bindings for UIs built on top of the recetario
//! library.
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecetario.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
