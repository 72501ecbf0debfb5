//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Jenkins Extractor.
//! For now that is logging set-up.
//!
//! 此模块为 Jenkins Extractor 提供基础设施服务，目前为日志初始化。

pub mod logging;
