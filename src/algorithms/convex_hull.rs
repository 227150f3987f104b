pub mod graham_scan;

pub use graham_scan::{angular_sort, graham_scan};
