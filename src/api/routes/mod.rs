//! API route declarations

pub mod news_routes;
