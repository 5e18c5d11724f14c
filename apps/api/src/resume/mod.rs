// Resume API: parse pipeline, terminal input, HTTP handlers.
// Matching itself lives in crate::matching; this module only wires it up.

pub mod handlers;
pub mod input;
pub mod parser;
