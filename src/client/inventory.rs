// ABOUTME: Food and drink inventory operations
// ABOUTME: Both inventories share one generic implementation keyed by unit dimension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use super::{ApiClient, AuthMode};
use crate::constants::api::{DRINKS, FOODS};
use crate::errors::{AppError, AppResult};
use crate::models::{
    Drink, Food, IntoPatch, InventoryItem, ItemUpdate, MeasureUnit, NewItem, VolumeUnit,
    WeightUnit,
};

impl ApiClient {
    /// Food inventory; the token is sent when one is stored
    ///
    /// # Errors
    ///
    /// Returns any transport or backend error
    pub async fn list_foods(&self) -> AppResult<Vec<Food>> {
        self.list_items(FOODS).await
    }

    /// Add a food to the inventory
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or non-positive quantity, or
    /// any backend error
    pub async fn create_food(&self, food: &NewItem<WeightUnit>) -> AppResult<Food> {
        self.create_item(FOODS, food).await
    }

    /// Edit a food
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `update` sets nothing, or any backend error
    pub async fn update_food(&self, food_id: &str, update: ItemUpdate<WeightUnit>) -> AppResult<Food> {
        self.update_item(FOODS, food_id, update).await
    }

    /// Remove a food from the inventory
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or any backend error
    pub async fn delete_food(&self, food_id: &str) -> AppResult<()> {
        let url = self.endpoint(FOODS, &[food_id])?;
        self.delete(url).await
    }

    /// Drink inventory; the token is sent when one is stored
    ///
    /// # Errors
    ///
    /// Returns any transport or backend error
    pub async fn list_drinks(&self) -> AppResult<Vec<Drink>> {
        self.list_items(DRINKS).await
    }

    /// Add a drink to the inventory
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or non-positive quantity, or
    /// any backend error
    pub async fn create_drink(&self, drink: &NewItem<VolumeUnit>) -> AppResult<Drink> {
        self.create_item(DRINKS, drink).await
    }

    /// Edit a drink
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `update` sets nothing, or any backend error
    pub async fn update_drink(
        &self,
        drink_id: &str,
        update: ItemUpdate<VolumeUnit>,
    ) -> AppResult<Drink> {
        self.update_item(DRINKS, drink_id, update).await
    }

    /// Remove a drink from the inventory
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or any backend error
    pub async fn delete_drink(&self, drink_id: &str) -> AppResult<()> {
        let url = self.endpoint(DRINKS, &[drink_id])?;
        self.delete(url).await
    }

    async fn list_items<U: MeasureUnit>(&self, collection: &str) -> AppResult<Vec<InventoryItem<U>>> {
        let url = self.endpoint(collection, &[])?;
        self.get(url, AuthMode::Optional).await
    }

    async fn create_item<U: MeasureUnit>(
        &self,
        collection: &str,
        item: &NewItem<U>,
    ) -> AppResult<InventoryItem<U>> {
        if item.name.trim().is_empty() {
            return Err(AppError::invalid_input("Item name must not be empty"));
        }
        if !item.quantity.value.is_finite() || item.quantity.value <= 0.0 {
            return Err(AppError::invalid_input(
                "Reference quantity must be greater than zero",
            ));
        }
        let url = self.endpoint(collection, &[])?;
        self.post(url, AuthMode::Required, Some(item)).await
    }

    async fn update_item<U: MeasureUnit>(
        &self,
        collection: &str,
        item_id: &str,
        update: ItemUpdate<U>,
    ) -> AppResult<InventoryItem<U>> {
        if update
            .quantity
            .is_some_and(|q| !q.value.is_finite() || q.value <= 0.0)
        {
            return Err(AppError::invalid_input(
                "Reference quantity must be greater than zero",
            ));
        }
        let url = self.endpoint(collection, &[item_id])?;
        self.patch(url, &update.into_patch()).await
    }
}
