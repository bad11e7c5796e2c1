//! Backend API clients

pub mod chat;
