/// Reasons a line-item snapshot is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("line_item.quantity_not_positive")]
    QuantityNotPositive,
    #[error("line_item.negative_price")]
    NegativePrice,
    #[error("line_item.name_empty")]
    NameEmpty,
    #[error("line_item.product_id_empty")]
    ProductIdEmpty,
    #[error("line_item.duplicate_product")]
    DuplicateProduct,
}
