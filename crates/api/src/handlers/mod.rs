pub mod categories;
pub mod franchises;
pub mod search;
pub mod stats;
