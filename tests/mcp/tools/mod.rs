mod classify;
mod config;
mod scan;
mod sync;
