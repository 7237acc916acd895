//! # client
//!
//! Leptos frontend for the personal-finance dashboard.
//!
//! This crate contains the route table, the root `App` component with its
//! router, and the page components. The `server` crate renders it over SSR
//! with the `ssr` feature enabled.

pub mod app;
pub mod pages;
pub mod routes;
