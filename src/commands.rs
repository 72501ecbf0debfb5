//! # Commands Module / 命令模块
//!
//! Entry points invoked by the command-line front end.
//!
//! 由命令行前端调用的入口。

pub mod run;
