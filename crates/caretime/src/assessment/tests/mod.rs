mod classify;
mod common;
mod engine;
mod router;
mod scores;
