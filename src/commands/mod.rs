pub mod completion;
pub mod docs;
pub mod routes;
