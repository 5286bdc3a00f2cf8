// Career catalogue: a fixed list of careers that clients browse, search, filter and sort.

pub mod careers;
pub mod explorer;
pub mod handlers;
