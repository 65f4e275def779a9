//! 测试模块入口：公共逻辑在 `lib` 子模块，按功能划分的测试在 `internal`。

#[cfg(test)]
pub use lib::*;
