mod meta;
pub use self::meta::{PageCount, PageResponse, Pagination};

mod committee;
pub use self::committee::CommitteeType;

mod cycle;
pub use self::cycle::TwoYearPeriod;
