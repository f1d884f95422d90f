//! Use-case services over the repository layer.

pub mod note_service;
