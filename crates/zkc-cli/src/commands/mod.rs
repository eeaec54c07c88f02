pub mod calldata;
pub mod config;
pub mod demo;
pub mod prove;
pub mod verify;
