use actix_web::HttpResponse;

use crate::dto::ProtectedResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/protected
///
/// Mounted behind `JwtAuth::required()`, so a missing or invalid token never
/// reaches this function.
pub async fn protected(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(ProtectedResponse::greeting(auth.user_id))
}
