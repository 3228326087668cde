use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde::Serialize;
use tracing::error;

use crate::secret_santa::AssignmentErr;
use crate::utils::auth::admin::AdminAuthErr;
use crate::utils::auth::identity::IdentityErr;
use crate::utils::auth::jwt::JWTErr;
use crate::utils::data_validation::deadline::DeadlineErr;
use crate::utils::data_validation::member_name::MemberNameErr;
use crate::utils::data_validation::product_link::ProductLinkErr;
use crate::utils::data_validation::team_name::TeamNameErr;
use crate::utils::data_validation::wish_text::WishTextErr;

#[derive(Debug, Clone)]
pub enum FWErr {
    JWTError(JWTErr),
    HashingError,

    ValidationMemberNameError(MemberNameErr),
    ValidationTeamNameError(TeamNameErr),
    ValidationWishTextError(WishTextErr),
    ValidationProductLinkError(ProductLinkErr),
    ValidationDeadlineError(DeadlineErr),

    AdminAuthError(AdminAuthErr),
    IdentityError(IdentityErr),
    AssignmentError(AssignmentErr),

    MemberNotFound(String),
    MemberAlreadyExists(String),
    WishNotFound(i64),
    WishesLocked,

    ConfigError(String),
    DBError(String),
}

impl From<DbErr> for FWErr {
    fn from(err: DbErr) -> Self {
        FWErr::DBError(err.to_string())
    }
}

impl From<AssignmentErr> for FWErr {
    fn from(err: AssignmentErr) -> Self {
        FWErr::AssignmentError(err)
    }
}

impl fmt::Display for FWErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FWErr::JWTError(err) => write!(f, "token error: {:?}", err),
            FWErr::HashingError => write!(f, "password hashing failed"),
            FWErr::ValidationMemberNameError(err) => write!(f, "invalid member name: {:?}", err),
            FWErr::ValidationTeamNameError(err) => write!(f, "invalid team name: {:?}", err),
            FWErr::ValidationWishTextError(err) => write!(f, "invalid wish text: {:?}", err),
            FWErr::ValidationProductLinkError(err) => write!(f, "invalid product link: {:?}", err),
            FWErr::ValidationDeadlineError(err) => write!(f, "invalid deadline: {:?}", err),
            FWErr::AdminAuthError(err) => write!(f, "admin authentication failed: {:?}", err),
            FWErr::IdentityError(err) => write!(f, "identity error: {:?}", err),
            FWErr::AssignmentError(AssignmentErr::DegenerateInput) => {
                write!(f, "Need at least 2 family members for Secret Santa!")
            }
            FWErr::AssignmentError(AssignmentErr::InfeasibleAssignment) => write!(
                f,
                "Could not create a valid Secret Santa assignment. Check the family pool for duplicate entries."
            ),
            FWErr::MemberNotFound(name) => write!(f, "{} is not in the family pool.", name),
            FWErr::MemberAlreadyExists(name) => {
                write!(f, "Error: {} already exists in the family pool.", name)
            }
            FWErr::WishNotFound(id) => write!(f, "Wish {} does not exist.", id),
            FWErr::WishesLocked => {
                write!(f, "Wishes are no longer accepted, the deadline has passed.")
            }
            FWErr::ConfigError(msg) => write!(f, "configuration error: {}", msg),
            FWErr::DBError(msg) => write!(f, "database error: {}", msg),
        }
    }
}

impl std::error::Error for FWErr {}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl FWErr {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FWErr::ValidationMemberNameError(_)
            | FWErr::ValidationTeamNameError(_)
            | FWErr::ValidationWishTextError(_)
            | FWErr::ValidationProductLinkError(_)
            | FWErr::ValidationDeadlineError(_) => StatusCode::BAD_REQUEST,
            FWErr::JWTError(_) | FWErr::AdminAuthError(_) | FWErr::IdentityError(_) => {
                StatusCode::UNAUTHORIZED
            }
            FWErr::AssignmentError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FWErr::MemberNotFound(_) | FWErr::WishNotFound(_) => StatusCode::NOT_FOUND,
            FWErr::MemberAlreadyExists(_) => StatusCode::CONFLICT,
            FWErr::WishesLocked => StatusCode::FORBIDDEN,
            FWErr::HashingError | FWErr::ConfigError(_) | FWErr::DBError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FWErr::JWTError(_) => "invalid_token",
            FWErr::HashingError => "internal",
            FWErr::ValidationMemberNameError(_) => "invalid_member_name",
            FWErr::ValidationTeamNameError(_) => "invalid_team_name",
            FWErr::ValidationWishTextError(_) => "invalid_wish_text",
            FWErr::ValidationProductLinkError(_) => "invalid_product_link",
            FWErr::ValidationDeadlineError(_) => "invalid_deadline",
            FWErr::AdminAuthError(_) => "admin_auth_failed",
            FWErr::IdentityError(_) => "identity_required",
            FWErr::AssignmentError(AssignmentErr::DegenerateInput) => "degenerate_input",
            FWErr::AssignmentError(AssignmentErr::InfeasibleAssignment) => {
                "infeasible_assignment"
            }
            FWErr::MemberNotFound(_) => "member_not_found",
            FWErr::MemberAlreadyExists(_) => "member_exists",
            FWErr::WishNotFound(_) => "wish_not_found",
            FWErr::WishesLocked => "wishes_locked",
            FWErr::ConfigError(_) => "internal",
            FWErr::DBError(_) => "internal",
        }
    }
}

impl IntoResponse for FWErr {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(target: "http", "Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        let body = ErrorBody {
            error: self.error_code(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
