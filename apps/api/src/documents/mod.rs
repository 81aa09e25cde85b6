// Document collaborators for the upload endpoints: request extraction,
// pluggable parsing backends, and rule-based field explanations.
// Nothing here feeds the scorer directly; clients forward `parsed` to /api/match.

pub mod explain;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod upload;
