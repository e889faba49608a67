use actix_web::{HttpResponse as ActixResponse, web};
use std::sync::Arc;

use super::dtos::LoginBody;
use super::login_router::{HttpRequest, LoginRouter};

/// Handler for user login
///
/// POST /api/login
/// Body: LoginBody (JSON)
///
/// The body is extracted as optional so that an absent or unparseable
/// payload reaches the router as a request without a body instead of being
/// rejected by the framework with its own error shape.
pub async fn login_handler(
  body: Option<web::Json<LoginBody>>,
  router: web::Data<Arc<LoginRouter>>,
) -> ActixResponse {
  let request = HttpRequest {
    body: body.map(web::Json::into_inner),
  };

  let response = router.route(Some(request)).await;

  ActixResponse::build(response.status_code).json(response.body)
}

/// Configure login routes
///
/// Mounts the login endpoint under the provided scope. The route is
/// prefixed with the scope path (e.g. /api).
pub fn configure_login_routes(cfg: &mut web::ServiceConfig, login_router: Arc<LoginRouter>) {
  cfg
    .app_data(web::Data::new(login_router))
    .route("/login", web::post().to(login_handler));
}
