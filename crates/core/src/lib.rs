//! Elegant Context Core - Catalog and shopping cart library.
//!
//! This crate provides everything the shop needs to manage a cart for the
//! length of a session:
//! - a read-only product catalog
//! - a pure cart reducer over a closed set of actions
//! - a store that owns the cart and applies actions to it
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no
//! persistence, no rendering. The `cli` crate drives it from the terminal.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - Products and the [`ProductLookup`] trait
//! - [`cart`] - Cart state, actions, and the [`reduce`] function
//! - [`store`] - [`CartStore`], the single owner of a session's cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod store;
pub mod types;

pub use cart::{
    ActionEnvelope, ActionError, CartAction, CartError, CartItem, CartState, reduce,
};
pub use catalog::{Catalog, CatalogError, Product, ProductLookup};
pub use store::{CartStore, DispatchError};
pub use types::*;
