//! Station directory server.
//!
//! A small REST service for creating, listing, updating and deleting radio
//! station records held in memory.

pub mod config;
pub mod domain;
pub mod logging;
pub mod repository;
pub mod web;
