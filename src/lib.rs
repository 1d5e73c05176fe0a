//! Rust LMS Quiz - 阿拉伯语学习平台测验服务
//!
//! 基于 Actix Web 构建的测验生成、评分与反馈后端。
//!
//! # 架构
//! - `ai`: 生成式 AI 能力（Gemini）与出题
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 速率限制中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `scoring`: 评分与反馈等级
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod ai;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod scoring;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
