use crate::cache;
use crate::db::get_db_pool;
use crate::metrics;
use crate::middleware::ClientCtx;
use crate::orm::products;
use actix_web::{error, get, Error, HttpResponse, Responder};
use askama::Template;
use sea_orm::{entity::*, query::*};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_products);
}

#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductListTemplate {
    pub client: ClientCtx,
    pub products: Vec<products::Model>,
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Product listing. The rendered body is cached, so within the TTL window
/// every user sees the same page without a database round trip.
#[get("/products/")]
pub async fn view_products(client: ClientCtx) -> Result<impl Responder, Error> {
    client.require_login()?;
    let _timer = metrics::Timer::start("view_products");

    if let Some(body) = cache::get_product_listing() {
        log::debug!("view_products: cache hit");
        return Ok(html_response(body));
    }

    let products = products::Entity::find()
        .order_by_asc(products::Column::Name)
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    let body = ProductListTemplate { client, products }
        .render()
        .map_err(error::ErrorInternalServerError)?;

    cache::store_product_listing(body.clone());
    Ok(html_response(body))
}
