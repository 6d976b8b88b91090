//! POS Module Endpoints
//!
//! Registers, products, sales, refunds, receipts, kitchen, and analytics
//! under `/modules/pos`.

use serde::Serialize;

use super::{ApiResult, SessionContext};
use crate::cart::{RefundRequest, SaleRequest};
use crate::models::{
    PosAnalyticsSummary, PosProduct, PosRegister, Receipt, Refund, RegisterSession, Sale,
};

#[derive(Serialize)]
struct OpenSessionArgs {
    opening_cents: i64,
}

#[derive(Serialize)]
struct CloseSessionArgs {
    closing_cents: i64,
}

pub async fn registers(session: SessionContext) -> ApiResult<Vec<PosRegister>> {
    super::get_json(session, "/modules/pos/registers").await
}

pub async fn open_register(
    session: SessionContext,
    register_id: u32,
    opening_cents: i64,
) -> ApiResult<RegisterSession> {
    super::post_json(
        session,
        &format!("/modules/pos/registers/{}/open", register_id),
        &OpenSessionArgs { opening_cents },
    )
    .await
}

pub async fn close_register_session(
    session: SessionContext,
    session_id: u32,
    closing_cents: i64,
) -> ApiResult<RegisterSession> {
    super::post_json(
        session,
        &format!("/modules/pos/sessions/{}/close", session_id),
        &CloseSessionArgs { closing_cents },
    )
    .await
}

pub async fn products(
    session: SessionContext,
    search: Option<&str>,
) -> ApiResult<Vec<PosProduct>> {
    let path = match search {
        Some(term) if !term.trim().is_empty() => {
            format!("/modules/pos/products?search={}", super::encode_query(term))
        }
        _ => "/modules/pos/products".to_string(),
    };
    super::get_json(session, &path).await
}

pub async fn create_sale(session: SessionContext, request: &SaleRequest) -> ApiResult<Sale> {
    super::post_json(session, "/modules/pos/sales", request).await
}

pub async fn get_sale(session: SessionContext, id: u32) -> ApiResult<Sale> {
    super::get_json(session, &format!("/modules/pos/sales/{}", id)).await
}

pub async fn recent_sales(session: SessionContext) -> ApiResult<Vec<Sale>> {
    super::get_json(session, "/modules/pos/sales").await
}

pub async fn create_refund(
    session: SessionContext,
    request: &RefundRequest,
) -> ApiResult<Refund> {
    super::post_json(session, "/modules/pos/refunds", request).await
}

pub async fn receipt(session: SessionContext, sale_id: u32) -> ApiResult<Receipt> {
    super::get_json(session, &format!("/modules/pos/sales/{}/receipt", sale_id)).await
}

/// Sales with a pending kitchen status
pub async fn kitchen_queue(session: SessionContext) -> ApiResult<Vec<Sale>> {
    super::get_json(session, "/modules/pos/kitchen").await
}

pub async fn mark_kitchen_ready(session: SessionContext, sale_id: u32) -> ApiResult<Sale> {
    super::post_json(
        session,
        &format!("/modules/pos/kitchen/{}/ready", sale_id),
        &serde_json::json!({}),
    )
    .await
}

pub async fn analytics_summary(session: SessionContext) -> ApiResult<PosAnalyticsSummary> {
    super::get_json(session, "/modules/pos/analytics/summary").await
}
