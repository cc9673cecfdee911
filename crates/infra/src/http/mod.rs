//! HTTP client wrapper shared by the resource clients and the token refresher

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
