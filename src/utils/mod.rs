//! # 常用接口模块
//!
//! 本模块提供一些常用的操作接口

#[cfg(test)]
mod tests;


pub mod traits {
    pub mod element;
}
