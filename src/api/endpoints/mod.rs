//! Endpoint handlers, one module per surface.

pub mod admin;
pub mod chat;
pub mod health;
pub mod home;
pub mod whatsapp;
