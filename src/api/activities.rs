use actix_web::{
    error::{self, QueryPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, Responder, ResponseError,
};
use shared::api::activity::{ErrorResponse, MessageResponse, SignupQuery};
use tracing::{info, warn};

use crate::store::{ActivityStore, StoreError};

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::ActivityNotFound => StatusCode::NOT_FOUND,
            StoreError::AlreadySignedUp | StoreError::NotRegistered | StoreError::ActivityFull => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

async fn list(store: web::Data<ActivityStore>) -> impl Responder {
    web::Json(store.list())
}

async fn signup(
    store: web::Data<ActivityStore>,
    name: web::Path<String>,
    query: web::Query<SignupQuery>,
) -> actix_web::Result<impl Responder> {
    let message = store.signup(&name, &query.email).inspect_err(|err| {
        warn!("signup of {} for {} rejected: {}", query.email, name, err);
    })?;

    info!("{}", message);

    Ok(web::Json(MessageResponse { message }))
}

async fn unregister(
    store: web::Data<ActivityStore>,
    name: web::Path<String>,
    query: web::Query<SignupQuery>,
) -> actix_web::Result<impl Responder> {
    let message = store.unregister(&name, &query.email).inspect_err(|err| {
        warn!("unregister of {} from {} rejected: {}", query.email, name, err);
    })?;

    info!("{}", message);

    Ok(web::Json(MessageResponse { message }))
}

/// Malformed or missing query strings answer with `{detail}` like every other
/// rejection.
fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    warn!("{} {} rejected: {}", req.method(), req.path(), detail);

    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse::new(detail)),
    )
    .into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .route("", web::get().to(list))
        .route("/{activity_name}/signup", web::post().to(signup))
        .route("/{activity_name}/unregister", web::delete().to(unregister));
}
