//! Storage layer - database entity, migrations and store implementation

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
