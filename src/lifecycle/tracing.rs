//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! level is read from `RUST_LOG`. The crate/module target is hidden; actors tag
//! their events with `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run            # lifecycle and mutations
//! RUST_LOG=debug cargo run           # plus request payloads
//! RUST_LOG=storefront=trace cargo run
//! ```
//!
//! With `RUST_LOG=info` a demo run reads roughly:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO Actor started entity_type="Cart"
//! INFO open: Cart opened cart_id=cart_1
//! INFO add_to_cart{cart_id=cart_1 product_id=product_1}: Action ok entity_type="Cart" id=cart_1
//! ```

/// Initializes the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
