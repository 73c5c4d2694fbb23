//! Product service
//!
//! CRUD and stock adjustment over products. The owning branch id always
//! comes from the command context; update operations only ever touch name,
//! stock, and `updated_at`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use validator::Validate;

use crate::domain::{NewProduct, Product, ProductDraft, ProductRename, StockUpdate};
use crate::error::DomainError;
use crate::repositories::{BranchRepository, ProductRepository};

pub struct ProductService<P, B> {
    products: Arc<P>,
    branches: Arc<B>,
}

impl<P: ProductRepository, B: BranchRepository> ProductService<P, B> {
    pub fn new(products: Arc<P>, branches: Arc<B>) -> Self {
        Self { products, branches }
    }

    pub async fn add_to_branch(
        &self,
        branch_id: i64,
        draft: ProductDraft,
    ) -> Result<Product, DomainError> {
        draft.validate()?;

        self.branches
            .find_by_id(branch_id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Branch", id: branch_id })?;

        let now = Utc::now();
        let product = NewProduct {
            name: draft.name,
            stock: draft.stock,
            branch_id,
            created_at: now,
            updated_at: now,
        };

        let saved = self.products.save(&product).await?;
        info!("Added product {} to branch {}", saved.id, branch_id);
        Ok(saved)
    }

    pub async fn delete(&self, product_id: i64) -> Result<(), DomainError> {
        self.products
            .find_by_id(product_id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Product", id: product_id })?;

        self.products.delete_by_id(product_id).await?;
        info!("Deleted product: {}", product_id);
        Ok(())
    }

    pub async fn update_stock(
        &self,
        product_id: i64,
        update: StockUpdate,
    ) -> Result<Product, DomainError> {
        update.validate()?;

        let mut product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Product", id: product_id })?;

        product.stock = update.stock;
        product.updated_at = Utc::now();

        let updated = self.products.update(&product).await?;
        info!("Updated product {} stock to: {}", product_id, updated.stock);
        Ok(updated)
    }

    pub async fn rename(
        &self,
        product_id: i64,
        rename: ProductRename,
    ) -> Result<Product, DomainError> {
        rename.validate()?;

        let mut product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Product", id: product_id })?;

        product.name = rename.name;
        product.updated_at = Utc::now();

        let updated = self.products.update(&product).await?;
        info!("Updated product {} name to: {}", product_id, updated.name);
        Ok(updated)
    }

    pub async fn list_by_branch(&self, branch_id: i64) -> Result<Vec<Product>, DomainError> {
        let products = self.products.find_by_branch_id(branch_id).await?;
        debug!("Retrieved products for branch: {}", branch_id);
        Ok(products)
    }
}
