// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod content;
pub mod password;

pub use content::ContentService;
