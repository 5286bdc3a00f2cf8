// Career matching: fixed keyword rules mapping free-text skills/interests to career titles.
// Pure and stateless; holds no shared state.

pub mod handlers;
pub mod rules;
