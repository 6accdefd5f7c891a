//! 产品数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 产品记录，启动时创建后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// 以 JSON 数字写出，位数不变
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl Product {
    pub fn new(id: i32, name: &str, description: &str, price: Decimal) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_is_written_as_a_json_number() {
        let product = Product::new(
            3,
            "Headphones",
            "Wireless noise-cancelling headphones",
            dec!(249.99),
        );
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"price\":249.99"), "{}", json);

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
