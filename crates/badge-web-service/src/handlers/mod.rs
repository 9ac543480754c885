//! HTTP 处理函数

pub mod generate;
pub mod health;
pub mod page;
pub mod user;
