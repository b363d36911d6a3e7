mod common;
mod import;
mod session;
