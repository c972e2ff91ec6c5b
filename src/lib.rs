//! Working-time reconciliation engine for the Bizkaia retail agreement
//!
//! This crate builds a worker's year calendar (public holidays, agreement
//! days, vacation and sick leave), aggregates the hours worked, and checks
//! them against the agreement's annual hour ceiling to work out the excess
//! hours, the rest days owed and their value at the overtime rate. It also
//! reconciles payslips against the provincial salary tables.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
