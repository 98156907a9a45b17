//! storeadmin-types: domain types and collaborator ports for the admin dashboard

pub mod domain;
pub mod ports;
