pub mod media;
pub mod storage;

mod router;
pub use router::get_router;
