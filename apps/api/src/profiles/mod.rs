// Profile storage: process-lifetime, email-keyed, last-write-wins.

pub mod handlers;
pub mod store;
