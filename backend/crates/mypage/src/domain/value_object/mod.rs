//! Value Object Module

pub mod address;
pub mod upload;
