//! In-memory stores for the session state. Nothing here outlives the process.

pub mod cart {
    pub mod repository;
}
pub mod catalog {
    pub mod repository;
}
pub mod drawer {
    pub mod repository;
}
