//! 目录存储

use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::Arc;

use super::model::Product;
use crate::core::error::CoreError;

/// 只读的产品序列，按种子顺序保存
///
/// 克隆只复制 `Arc`，所有请求共享同一份数据。
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<[Product]>,
}

impl CatalogStore {
    /// 用给定的产品构建目录，重复的 id 只保留第一次出现的
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::with_capacity(products.len());
        let products: Vec<Product> = products
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.id);
                if !fresh {
                    tracing::warn!(id = p.id, "忽略重复的产品 id");
                }
                fresh
            })
            .collect();

        Self {
            products: products.into(),
        }
    }

    /// 默认的五个示例产品
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Laptop", "High-performance laptop", dec!(1299.99)),
            Product::new(2, "Smartphone", "Latest model smartphone", dec!(899.99)),
            Product::new(
                3,
                "Headphones",
                "Wireless noise-cancelling headphones",
                dec!(249.99),
            ),
            Product::new(4, "Keyboard", "Mechanical gaming keyboard", dec!(129.99)),
            Product::new(5, "Mouse", "Ergonomic wireless mouse", dec!(59.99)),
        ])
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// 共享句柄，序列化时不复制产品
    pub fn shared(&self) -> Arc<[Product]> {
        Arc::clone(&self.products)
    }

    pub fn get(&self, id: i32) -> Result<&Product, CoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("product {}", id)))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}
