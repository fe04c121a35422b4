mod common;
mod song;
