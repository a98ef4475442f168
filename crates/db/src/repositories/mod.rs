//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&mut MySqlConnection` as the first argument, so a handler
//! runs all of its statements on the one connection it checked out.
//! Every value reaches MySQL as a bound parameter.

pub mod category_repo;
pub mod file_repo;
pub mod franchise_repo;
pub mod stats_repo;

pub use category_repo::CategoryRepo;
pub use file_repo::FileRepo;
pub use franchise_repo::FranchiseRepo;
pub use stats_repo::StatsRepo;
