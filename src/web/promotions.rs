use crate::db::get_db_pool;
use crate::flags;
use crate::flash;
use crate::middleware::ClientCtx;
use crate::orm::promotions;
use actix_web::{error, get, post, web, Error, HttpResponse, Responder};
use askama_actix::{Template, TemplateToResponse};
use chrono::NaiveDate;
use sea_orm::{entity::*, query::*};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Flag gating the whole promotions surface.
pub const PROMO_EDITOR_FLAG: &str = "promo_editor";

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(post_promotion).service(view_promotions);
}

#[derive(Template)]
#[template(path = "promotions.html")]
pub struct PromotionListTemplate {
    pub client: ClientCtx,
    pub promotions: Vec<promotions::Model>,
    pub messages: Vec<String>,
}

#[derive(Template)]
#[template(path = "feature_disabled.html")]
pub struct FeatureDisabledTemplate {
    pub client: ClientCtx,
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_discount_range"))]
pub struct PromotionForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub discount_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The discount is a percentage off, so 0 and 100 are both nonsense values.
fn validate_discount_range(form: &PromotionForm) -> Result<(), ValidationError> {
    if form.discount_percent <= 0.0 || form.discount_percent >= 100.0 {
        let mut err = ValidationError::new("discount_percent");
        err.message = Some("The discount must be strictly between 0 and 100.".into());
        return Err(err);
    }
    Ok(())
}

fn flash_validation_errors(cookies: &actix_session::Session, errors: &ValidationErrors) {
    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .clone()
                .unwrap_or_else(|| err.code.clone());
            if field == "__all__" {
                flash::push(cookies, format!("Validation error: {}", message));
            } else {
                flash::push(
                    cookies,
                    format!("Validation error for '{}': {}", field, message),
                );
            }
        }
    }
}

fn redirect_back() -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header(("Location", "/promotions/"))
        .finish()
}

/// Promotion listing with a creation form, gated on the promo_editor flag.
#[get("/promotions/")]
pub async fn view_promotions(
    client: ClientCtx,
    cookies: actix_session::Session,
) -> Result<impl Responder, Error> {
    client.require_login()?;

    if !flags::is_enabled(PROMO_EDITOR_FLAG)
        .await
        .map_err(error::ErrorInternalServerError)?
    {
        return Ok(FeatureDisabledTemplate { client }.to_response());
    }

    let promotions = promotions::Entity::find()
        .order_by_desc(promotions::Column::StartDate)
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    let messages = flash::take(&cookies);

    Ok(PromotionListTemplate {
        client,
        promotions,
        messages,
    }
    .to_response())
}

/// Create a promotion. Validation failures flash every error and bounce the
/// client back to the form.
#[post("/promotions/")]
pub async fn post_promotion(
    client: ClientCtx,
    cookies: actix_session::Session,
    form: web::Form<PromotionForm>,
) -> Result<impl Responder, Error> {
    client.require_login()?;

    if !flags::is_enabled(PROMO_EDITOR_FLAG)
        .await
        .map_err(error::ErrorInternalServerError)?
    {
        return Ok(FeatureDisabledTemplate { client }.to_response());
    }

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        log::debug!("post_promotion: rejected form: {}", errors);
        flash_validation_errors(&cookies, &errors);
        return Ok(redirect_back());
    }

    let promotion = promotions::ActiveModel {
        name: Set(form.name),
        discount_percent: Set(form.discount_percent),
        start_date: Set(form.start_date),
        end_date: Set(form.end_date),
        ..Default::default()
    };
    let promotion = promotion
        .insert(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    flash::push(
        &cookies,
        format!("Promotion \"{}\" created.", promotion.name),
    );
    Ok(redirect_back())
}
