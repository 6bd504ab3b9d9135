mod common;
mod professionals;
