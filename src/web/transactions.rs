use crate::app_config;
use crate::cache;
use crate::db::get_db_pool;
use crate::metrics;
use crate::middleware::ClientCtx;
use crate::orm::transaction_log;
use actix_web::{error, get, web, Error, HttpResponse, Responder};
use askama::Template;
use sea_orm::{entity::*, query::*};
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_transactions);
}

/// Upper bound on the page parameter. Pages past the data render empty, and
/// the clamp keeps the offset arithmetic and the "Next" link in range.
const MAX_PAGE: u64 = 1_000_000;

#[derive(Deserialize)]
pub struct PageQuery {
    page: Option<u64>,
}

#[derive(Template)]
#[template(path = "transactions.html")]
pub struct TransactionListTemplate {
    pub client: ClientCtx,
    pub transactions: Vec<transaction_log::Model>,
    pub page: u64,
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Paginated transaction history, newest first. Rendered pages are cached
/// per page number.
#[get("/transactions/")]
pub async fn view_transactions(
    client: ClientCtx,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, Error> {
    client.require_login()?;
    let _timer = metrics::Timer::start("view_transactions");

    let page = query.page.unwrap_or(1).clamp(1, MAX_PAGE);

    if let Some(body) = cache::get_transactions_page(page) {
        log::debug!("view_transactions: cache hit for page {}", page);
        return Ok(html_response(body));
    }

    let per_page = app_config::limits().transactions_per_page;
    let transactions = transaction_log::Entity::find()
        .order_by_desc(transaction_log::Column::CreatedAt)
        .limit(per_page)
        .offset((page - 1).saturating_mul(per_page))
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    let body = TransactionListTemplate {
        client,
        transactions,
        page,
    }
    .render()
    .map_err(error::ErrorInternalServerError)?;

    cache::store_transactions_page(page, body.clone());
    Ok(html_response(body))
}
