//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the admin panel:
//! - HMAC-SHA256 signing and base64url helpers for session tokens
//! - Password hashing (Argon2id)
//! - Cookie building and extraction
//! - Disk storage for uploaded files
//! - View payloads handed to the rendering layer

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod upload;
pub mod view;
