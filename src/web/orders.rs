use crate::audit;
use crate::db::get_db_pool;
use crate::middleware::ClientCtx;
use crate::orm::orders;
use actix_web::{error, get, web, Error, Responder};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::entity::*;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_order);
}

#[derive(Template)]
#[template(path = "order_detail.html")]
pub struct OrderDetailTemplate {
    pub client: ClientCtx,
    pub order: orders::Model,
}

/// Order detail page. Every view lands in the audit log.
#[get("/orders/{id}")]
pub async fn view_order(
    client: ClientCtx,
    path: web::Path<i32>,
) -> Result<impl Responder, Error> {
    client.require_login()?;

    let id = path.into_inner();
    audit::record(&client, "view_order", id);

    let order = orders::Entity::find_by_id(id)
        .one(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound(format!("Order {} does not exist.", id)))?;

    Ok(OrderDetailTemplate { client, order }.to_response())
}
