mod contract;
mod invoice;
mod pagination;
mod person;
mod team;
mod timesheet;

pub use contract::*;
pub use invoice::*;
pub use pagination::*;
pub use person::*;
pub use team::*;
pub use timesheet::*;
