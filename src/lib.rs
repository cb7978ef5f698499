//! # OCNOS Article Service
//!
//! Serves bibliographic metadata and section text for the articles published
//! in a single remote JSON document.
//!
//! Every request downloads the document, builds an in-memory
//! [`store::ArticleStore`], answers from it, and discards it. Articles and
//! sections are located by free-text queries that tolerate differences in
//! case, accents, and punctuation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────┐
//! │ ArticleSource│──▶│ ArticleStore │──▶│  Matcher  │
//! │  HTTP/static │   │ + sections   │   │ normalize │
//! └──────────────┘   └──────────────┘   └─────┬─────┘
//!                                             │
//!                       ┌─────────────────────┤
//!                       ▼                     ▼
//!                  ┌──────────┐         ┌──────────┐
//!                  │   CLI    │         │   HTTP   │
//!                  │ (ocnos)  │         │  server  │
//!                  └──────────┘         └──────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration and `PORT` override |
//! | [`error`] | Fetch and lookup errors |
//! | [`models`] | Payload and response types |
//! | [`normalize`] | Accent stripping and text normalization |
//! | [`openapi`] | OpenAPI document served by the HTTP server |
//! | [`source`] | Where the article document comes from |
//! | [`store`] | Per-request article store and section index |
//! | [`matcher`] | Article and section lookup |
//! | [`query`] | The three article queries |
//! | [`server`] | HTTP server |

pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod openapi;
pub mod query;
pub mod server;
pub mod source;
pub mod store;
