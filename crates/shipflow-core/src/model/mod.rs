//! モデル定義
//!
//! パイプラインを構成するイメージ・レシピ・レジストリの設定を定義します。
//! どのフィールドも省略時は mcp-azure-devops 向けの既定値になります。

mod image;
mod pipeline;
mod recipe;
mod registry;

pub use image::*;
pub use pipeline::*;
pub use recipe::*;
pub use registry::*;
