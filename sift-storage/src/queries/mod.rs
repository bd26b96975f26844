//! SQL statements, one module per concern. Every user-supplied value is a
//! bound parameter.

pub mod aggregation;
pub mod document_crud;
pub mod keyword_search;
pub mod vector_search;
