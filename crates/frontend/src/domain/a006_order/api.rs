use async_trait::async_trait;
use contracts::domain::a006_order::aggregate::{
    CreateOrderRequest, Order, OrderId, OrderQuery, OrderStatusUpdate,
};
use contracts::domain::common::AggregateRoot;

use super::lifecycle::OrderBackend;
use crate::shared::api_error::ApiError;
use crate::shared::rest_client::RestClient;

#[async_trait(?Send)]
impl OrderBackend for RestClient {
    async fn fetch_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ApiError> {
        self.get_list_filtered(&Order::collection_path(), query).await
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<(), ApiError> {
        self.post(&Order::collection_path(), request).await
    }

    async fn update_order(&self, id: OrderId, update: &OrderStatusUpdate) -> Result<(), ApiError> {
        self.put(&Order::element_path(&id), update).await
    }
}
