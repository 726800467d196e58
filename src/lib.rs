//! # Storefront
//!
//! > **An in-memory product catalog and shopping cart, built on resource actors.**
//!
//! Two stores hold all state: the **catalog** (products and their on-hand
//! stock) and the **cart** (products the user means to buy, each with its own
//! cart quantity). Nothing is persisted; everything lives for the lifetime of
//! the process.
//!
//! ## 🏗️ Design
//!
//! Each store is a `ResourceActor<T>`: a Tokio task that owns one keyed,
//! insertion-ordered collection and serves requests one at a time. Every
//! mutation is therefore atomic from the caller's side, and no lock guards
//! store state. Callers never see the channels; they use cheap, cloneable
//! domain clients.
//!
//! The stores never talk to each other. A caller reads a [`Product`](model::Product)
//! from the catalog and hands it to [`CartClient::add_to_cart`](clients::CartClient::add_to_cart),
//! which stores a value snapshot. Later catalog changes do not reach the cart.
//!
//! Derived figures (subtotal, 10% tax, total, average item price) are pure
//! functions over a cart snapshot and are recomputed on every call.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its client and the [`ActorEntity`](framework::ActorEntity)
//! trait entities implement. Also the [`framework::mock`] helpers for testing
//! clients without an actor.
//!
//! ### 2. The Data ([`model`])
//! [`Product`](model::Product), [`Cart`](model::Cart), category filtering, order
//! summaries and add-product form validation. No async code.
//!
//! ### 3. The Stores ([`catalog_actor`], [`cart_actor`])
//! Entity implementations, actions and per-store errors.
//!
//! ### 4. The Interface ([`clients`])
//! [`CatalogClient`](clients::CatalogClient) and [`CartClient`](clients::CartClient):
//! the operations callers actually use.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) spawns both stores, seeds the catalog,
//! opens the session cart and shuts everything down. Logging setup lives in
//! [`lifecycle::tracing`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
